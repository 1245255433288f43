use async_trait::async_trait;
use serde_json::Value;
use timedesk_domain::ProviderError;

/// Currency-rate upstream. Single provider, no fallback: the upstream JSON
/// body is passed through to the caller untouched.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn latest(&self, base: &str) -> Result<Value, ProviderError>;

    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Value, ProviderError>;
}
