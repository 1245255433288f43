#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use timedesk_application::ports::{HttpFetch, TimeProvider};
use timedesk_domain::{CanonicalReading, ProviderError, ZoneId};

// ============================================================================
// Mock TimeProvider
// ============================================================================

/// Provider over a `{datetime, timezone}` JSON payload. Endpoint embeds the
/// provider name so `ScriptedFetch` routes can target one provider+zone pair.
pub struct JsonTimeProvider {
    name: &'static str,
    timeout: Duration,
}

impl JsonTimeProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(name: &'static str, timeout: Duration) -> Self {
        Self { name, timeout }
    }
}

impl TimeProvider for JsonTimeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn endpoint(&self, zone: &ZoneId) -> String {
        format!("https://{}/time/{}", self.name, zone)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn normalize(&self, zone: &ZoneId, body: &[u8]) -> Result<CanonicalReading, ProviderError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| ProviderError::Normalization {
                provider: self.name,
                reason: e.to_string(),
            })?;

        let field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| ProviderError::Normalization {
                    provider: self.name,
                    reason: format!("missing field `{key}`"),
                })
        };

        Ok(CanonicalReading {
            zone_requested: zone.clone(),
            datetime: field("datetime")?,
            timezone_label: field("timezone")?,
            provider_name: self.name,
        })
    }
}

pub fn reading_body(datetime: &str, timezone: &str) -> String {
    format!(r#"{{"datetime":"{datetime}","timezone":"{timezone}"}}"#)
}

// ============================================================================
// Scripted HttpFetch
// ============================================================================

#[derive(Clone)]
enum ScriptKind {
    Body(String),
    Status(u16),
    Transport(String),
    /// Never responds within any timeout.
    Hang,
}

#[derive(Clone)]
pub struct Script {
    kind: ScriptKind,
    delay: Duration,
}

impl Script {
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            kind: ScriptKind::Body(body.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            kind: ScriptKind::Status(status),
            delay: Duration::ZERO,
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self {
            kind: ScriptKind::Transport(reason.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn hang() -> Self {
        Self {
            kind: ScriptKind::Hang,
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// `HttpFetch` returning scripted responses per URL prefix and recording
/// every attempted URL in call order. Unrouted URLs get HTTP 404, which
/// stands in for a provider rejecting an unknown zone.
#[derive(Clone, Default)]
pub struct ScriptedFetch {
    routes: Arc<Mutex<Vec<(String, Script)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url_prefix: impl Into<String>, script: Script) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((url_prefix.into(), script));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for ScriptedFetch {
    async fn get(&self, url: &str, timeout: Duration) -> Result<Bytes, ProviderError> {
        self.calls.lock().unwrap().push(url.to_string());

        let script = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, script)| script.clone());

        let Some(script) = script else {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: 404,
            });
        };

        let timed_out = |timeout: Duration| ProviderError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        };

        if matches!(script.kind, ScriptKind::Hang) || script.delay >= timeout {
            tokio::time::sleep(timeout).await;
            return Err(timed_out(timeout));
        }

        tokio::time::sleep(script.delay).await;
        match script.kind {
            ScriptKind::Body(body) => Ok(Bytes::from(body)),
            ScriptKind::Status(status) => Err(ProviderError::Status {
                url: url.to_string(),
                status,
            }),
            ScriptKind::Transport(reason) => Err(ProviderError::Transport {
                url: url.to_string(),
                reason,
            }),
            ScriptKind::Hang => unreachable!(),
        }
    }
}
