use crate::ports::RateSource;
use serde_json::Value;
use std::sync::Arc;
use timedesk_domain::ProviderError;

/// Fetches the latest exchange rates for a base currency. Single upstream,
/// no fallback; the upstream body is passed through untouched.
pub struct GetRatesUseCase {
    source: Arc<dyn RateSource>,
}

impl GetRatesUseCase {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, base: &str) -> Result<Value, ProviderError> {
        self.source.latest(base).await
    }
}
