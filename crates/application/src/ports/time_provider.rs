use std::time::Duration;
use timedesk_domain::{CanonicalReading, ProviderError, ZoneId};

/// One upstream time service: how to address it and how to read its payload.
///
/// Implementations are immutable descriptors constructed once at startup.
/// Their order in the provider list is the fallback priority; the list
/// itself is never mutated at request time.
pub trait TimeProvider: Send + Sync {
    /// Unique name, used in diagnostics and surfaced as `provider` in
    /// successful readings.
    fn name(&self) -> &'static str;

    /// Builds the request target for a zone. The zone string is passed
    /// through unmodified, internal separators included.
    fn endpoint(&self, zone: &ZoneId) -> String;

    /// Per-attempt network timeout. No retry within one resolution.
    fn timeout(&self) -> Duration;

    /// Pure transform from the provider's raw payload to a canonical
    /// reading. A payload missing expected fields is a
    /// `ProviderError::Normalization` — a provider failure for fallback
    /// purposes, never fatal.
    fn normalize(&self, zone: &ZoneId, body: &[u8]) -> Result<CanonicalReading, ProviderError>;
}
