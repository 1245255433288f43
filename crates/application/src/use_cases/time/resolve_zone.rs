use crate::ports::{HttpFetch, TimeProvider};
use std::sync::Arc;
use std::time::Instant;
use timedesk_domain::{CanonicalReading, ProviderFailure, ResolutionFailed, ZoneId};
use tracing::{debug, warn};

/// Resolves one zone by attempting providers strictly in declared order.
///
/// The provider list is frozen at construction; earlier entries are always
/// tried first, never load-balanced. First successful transform wins and
/// short-circuits the loop, so at most one upstream call succeeds per
/// resolution. Every failed attempt is recorded and recovered locally; only
/// full exhaustion surfaces as an error.
pub struct ResolveZoneUseCase {
    providers: Vec<Arc<dyn TimeProvider>>,
    fetcher: Arc<dyn HttpFetch>,
}

impl ResolveZoneUseCase {
    pub fn new(providers: Vec<Arc<dyn TimeProvider>>, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self { providers, fetcher }
    }

    pub async fn execute(&self, zone: &ZoneId) -> Result<CanonicalReading, ResolutionFailed> {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let url = provider.endpoint(zone);
            debug!(provider = provider.name(), %zone, %url, "Attempting provider");

            let start = Instant::now();
            let outcome = match self.fetcher.get(&url, provider.timeout()).await {
                Ok(body) => provider.normalize(zone, &body),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(reading) => {
                    debug!(
                        provider = provider.name(),
                        %zone,
                        latency_ms = start.elapsed().as_millis() as u64,
                        "Provider attempt successful"
                    );
                    return Ok(reading);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        %zone,
                        error = %e,
                        "Provider attempt failed, trying next"
                    );
                    attempts.push(ProviderFailure::record(provider.name(), &e));
                }
            }
        }

        Err(ResolutionFailed {
            zone: zone.clone(),
            attempts,
        })
    }
}
