use serde::Serialize;
use timedesk_domain::{CanonicalReading, ZoneOutcome};

#[derive(Serialize, Debug, Clone)]
pub struct TimeReadingResponse {
    pub datetime: String,
    pub timezone: String,
    pub provider: &'static str,
}

impl From<CanonicalReading> for TimeReadingResponse {
    fn from(reading: CanonicalReading) -> Self {
        Self {
            datetime: reading.datetime,
            timezone: reading.timezone_label,
            provider: reading.provider_name,
        }
    }
}

/// One batch slot: `{datetime, timezone, provider}` on success,
/// `{timezone, error}` on failure.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum ZoneOutcomeResponse {
    Reading(TimeReadingResponse),
    Failed { timezone: String, error: String },
}

impl From<ZoneOutcome> for ZoneOutcomeResponse {
    fn from(outcome: ZoneOutcome) -> Self {
        match outcome {
            ZoneOutcome::Reading(reading) => Self::Reading(reading.into()),
            ZoneOutcome::Failed {
                zone_requested,
                error,
            } => Self::Failed {
                timezone: zone_requested.to_string(),
                error,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BatchTimesResponse {
    pub results: Vec<ZoneOutcomeResponse>,
}
