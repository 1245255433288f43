use super::ResolveZoneUseCase;
use futures::future::join_all;
use std::sync::Arc;
use timedesk_domain::{BatchResult, ZoneId, ZoneOutcome};
use tracing::debug;

/// Resolves a batch of zones concurrently, one future per zone.
///
/// Zones are independent: a failed zone becomes a failure-tagged outcome in
/// its slot and never aborts, delays indefinitely, or affects its siblings.
/// Duplicates are resolved separately, and the output order mirrors the
/// input order regardless of completion order. Total latency approaches the
/// slowest zone's resolution, not the sum.
pub struct ResolveBatchUseCase {
    resolve_zone: Arc<ResolveZoneUseCase>,
}

impl ResolveBatchUseCase {
    pub fn new(resolve_zone: Arc<ResolveZoneUseCase>) -> Self {
        Self { resolve_zone }
    }

    pub async fn execute(&self, zones: &[ZoneId]) -> BatchResult {
        if zones.is_empty() {
            return Vec::new();
        }

        debug!(batch_size = zones.len(), "Resolving batch");

        let tasks = zones.iter().map(|zone| {
            let resolve_zone = Arc::clone(&self.resolve_zone);
            let zone = zone.clone();
            async move { ZoneOutcome::from_resolution(resolve_zone.execute(&zone).await) }
        });

        // join_all yields results in task order, which is input order.
        join_all(tasks).await
    }
}
