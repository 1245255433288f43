use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use timedesk_application::ports::{HttpFetch, RateSource};
use timedesk_domain::ProviderError;

const TIMEOUT: Duration = Duration::from_secs(10);

/// Currency-rate client for api.exchangerate.host. No API key, no fallback;
/// the upstream JSON is handed to the caller unchanged.
pub struct ExchangeRateHost {
    fetcher: Arc<dyn HttpFetch>,
}

impl ExchangeRateHost {
    pub fn new(fetcher: Arc<dyn HttpFetch>) -> Self {
        Self { fetcher }
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, ProviderError> {
        let body = self.fetcher.get(url, TIMEOUT).await?;
        serde_json::from_slice(&body).map_err(|e| ProviderError::Normalization {
            provider: "exchangerate.host",
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RateSource for ExchangeRateHost {
    async fn latest(&self, base: &str) -> Result<Value, ProviderError> {
        self.fetch_json(&format!("https://api.exchangerate.host/latest?base={base}"))
            .await
    }

    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Value, ProviderError> {
        self.fetch_json(&format!(
            "https://api.exchangerate.host/convert?from={from}&to={to}&amount={amount}"
        ))
        .await
    }
}
