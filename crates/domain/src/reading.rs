use crate::errors::ResolutionFailed;
use crate::zone::ZoneId;

/// Normalized, provider-agnostic representation of "current time in a zone".
///
/// `datetime` is the canonical textual form: local wall clock at seconds
/// precision (`%Y-%m-%dT%H:%M:%S`), with a `±HH:MM` offset suffix when the
/// provider reported one. Produced only by a successful transform, never
/// partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalReading {
    pub zone_requested: ZoneId,
    pub datetime: String,
    pub timezone_label: String,
    pub provider_name: &'static str,
}

/// Result of resolving one zone inside a batch. Exactly one variant applies.
#[derive(Debug, Clone)]
pub enum ZoneOutcome {
    Reading(CanonicalReading),
    Failed { zone_requested: ZoneId, error: String },
}

impl ZoneOutcome {
    /// Projects a single-zone resolution into its batch slot. Exhaustion is
    /// a normal outcome here, not an error to propagate.
    pub fn from_resolution(result: Result<CanonicalReading, ResolutionFailed>) -> Self {
        match result {
            Ok(reading) => Self::Reading(reading),
            Err(failure) => Self::Failed {
                error: failure.to_string(),
                zone_requested: failure.zone,
            },
        }
    }

    pub fn zone_requested(&self) -> &ZoneId {
        match self {
            Self::Reading(reading) => &reading.zone_requested,
            Self::Failed { zone_requested, .. } => zone_requested,
        }
    }

    pub fn is_reading(&self) -> bool {
        matches!(self, Self::Reading(_))
    }
}

/// Ordered outcomes of a batch resolution, one per input zone, input order.
pub type BatchResult = Vec<ZoneOutcome>;
