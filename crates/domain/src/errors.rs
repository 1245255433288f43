use crate::zone::ZoneId;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Zone identifier cannot be empty")]
    EmptyZoneIdentifier,
}

/// Failure of one provider attempt. Transport-level and normalization-level
/// failures are equivalent for fallback purposes; they differ only in
/// diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed payload from {provider}: {reason}")]
    Normalization {
        provider: &'static str,
        reason: String,
    },
}

impl ProviderError {
    /// True when the payload arrived but could not be normalized.
    pub fn is_normalization(&self) -> bool {
        matches!(self, Self::Normalization { .. })
    }
}

/// One entry in the diagnostic trail of an exhausted resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub reason: String,
    pub normalization: bool,
}

impl ProviderFailure {
    pub fn record(provider: &'static str, error: &ProviderError) -> Self {
        Self {
            provider,
            reason: error.to_string(),
            normalization: error.is_normalization(),
        }
    }
}

/// Every provider was attempted for a zone and none produced a reading.
///
/// Carries one failure per attempted provider, in fallback order. The
/// `Display` form is the human-readable summary surfaced to callers.
#[derive(Debug, Clone)]
pub struct ResolutionFailed {
    pub zone: ZoneId,
    pub attempts: Vec<ProviderFailure>,
}

impl fmt::Display for ResolutionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No provider could supply time for '{}'", self.zone)?;
        if self.attempts.is_empty() {
            return write!(f, ": no providers configured");
        }
        write!(f, ": ")?;
        for (i, attempt) in self.attempts.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} ({})", attempt.provider, attempt.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolutionFailed {}
