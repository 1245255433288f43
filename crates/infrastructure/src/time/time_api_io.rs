use chrono::NaiveDateTime;
use serde::Deserialize;
use std::time::Duration;
use timedesk_application::ports::TimeProvider;
use timedesk_domain::{CanonicalReading, ProviderError, ZoneId};

const NAME: &str = "timeapi.io";
const TIMEOUT: Duration = Duration::from_secs(5);

/// Fallback provider: timeapi.io.
///
/// Responds with a naive local datetime and no offset, e.g.
/// `{"dateTime":"2026-08-30T08:12:49.1234567","timeZone":"America/New_York",...}`.
/// The canonical form therefore carries no offset suffix for this provider.
pub struct TimeApiIo;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeApiPayload {
    date_time: String,
    time_zone: String,
}

impl TimeApiIo {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeApiIo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for TimeApiIo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn endpoint(&self, zone: &ZoneId) -> String {
        // '/' is legal inside a query value, so the zone needs no escaping.
        format!("https://timeapi.io/api/Time/current/zone?timeZone={zone}")
    }

    fn timeout(&self) -> Duration {
        TIMEOUT
    }

    fn normalize(&self, zone: &ZoneId, body: &[u8]) -> Result<CanonicalReading, ProviderError> {
        let payload: TimeApiPayload =
            serde_json::from_slice(body).map_err(|e| ProviderError::Normalization {
                provider: NAME,
                reason: e.to_string(),
            })?;

        let local = NaiveDateTime::parse_from_str(&payload.date_time, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| ProviderError::Normalization {
                provider: NAME,
                reason: format!("unparseable dateTime '{}': {}", payload.date_time, e),
            })?;

        Ok(CanonicalReading {
            zone_requested: zone.clone(),
            datetime: local.format("%Y-%m-%dT%H:%M:%S").to_string(),
            timezone_label: payload.time_zone,
            provider_name: NAME,
        })
    }
}
