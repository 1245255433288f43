use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use timedesk_domain::ProviderError;

/// Network seam for provider attempts. The only suspension point in the
/// resolver; everything else is synchronous computation.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// GET the target within `timeout`. Timeouts, transport errors and
    /// non-success statuses come back as the matching `ProviderError`
    /// variant; a body is returned only for a successful response.
    async fn get(&self, url: &str, timeout: Duration) -> Result<Bytes, ProviderError>;
}
