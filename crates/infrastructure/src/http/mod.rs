use async_trait::async_trait;
use bytes::Bytes;
use std::sync::LazyLock;
use std::time::Duration;
use timedesk_application::ports::HttpFetch;
use timedesk_domain::ProviderError;
use tracing::debug;

/// Shared HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// `HttpFetch` over the shared reqwest client. The per-attempt timeout
/// covers both the request and the body read; every failure mode maps to a
/// `ProviderError` value for the resolver's fallback loop.
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str, timeout: Duration) -> Result<Bytes, ProviderError> {
        debug!(%url, timeout_ms = timeout.as_millis() as u64, "Sending upstream request");

        let timed_out = || ProviderError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        };

        let response = tokio::time::timeout(timeout, SHARED_CLIENT.get(url).send())
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| ProviderError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| ProviderError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        debug!(%url, response_len = body.len(), "Upstream response received");
        Ok(body)
    }
}
