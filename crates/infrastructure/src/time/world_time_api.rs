use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use timedesk_application::ports::TimeProvider;
use timedesk_domain::{CanonicalReading, ProviderError, ZoneId};

const NAME: &str = "worldtimeapi.org";
const TIMEOUT: Duration = Duration::from_secs(5);

/// Primary provider: worldtimeapi.org (the original upstream).
///
/// Responds with a full RFC 3339 instant, e.g.
/// `{"datetime":"2026-08-30T08:12:49.123456-04:00","timezone":"America/New_York",...}`.
pub struct WorldTimeApi;

#[derive(Deserialize)]
struct WorldTimePayload {
    datetime: String,
    timezone: String,
}

impl WorldTimeApi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorldTimeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for WorldTimeApi {
    fn name(&self) -> &'static str {
        NAME
    }

    fn endpoint(&self, zone: &ZoneId) -> String {
        format!("http://worldtimeapi.org/api/timezone/{zone}")
    }

    fn timeout(&self) -> Duration {
        TIMEOUT
    }

    fn normalize(&self, zone: &ZoneId, body: &[u8]) -> Result<CanonicalReading, ProviderError> {
        let payload: WorldTimePayload =
            serde_json::from_slice(body).map_err(|e| ProviderError::Normalization {
                provider: NAME,
                reason: e.to_string(),
            })?;

        // Re-render at seconds precision, offset kept.
        let instant = DateTime::parse_from_rfc3339(&payload.datetime).map_err(|e| {
            ProviderError::Normalization {
                provider: NAME,
                reason: format!("unparseable datetime '{}': {}", payload.datetime, e),
            }
        })?;

        Ok(CanonicalReading {
            zone_requested: zone.clone(),
            datetime: instant.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            timezone_label: payload.timezone,
            provider_name: NAME,
        })
    }
}
