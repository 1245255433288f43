use crate::ports::RateSource;
use serde_json::Value;
use std::sync::Arc;
use timedesk_domain::ProviderError;

pub struct ConvertAmountUseCase {
    source: Arc<dyn RateSource>,
}

impl ConvertAmountUseCase {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self, from: &str, to: &str, amount: f64) -> Result<Value, ProviderError> {
        self.source.convert(from, to, amount).await
    }
}
