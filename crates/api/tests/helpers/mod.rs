#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use timedesk_api::AppState;
use timedesk_application::ports::{HttpFetch, RateSource, TimeProvider};
use timedesk_application::use_cases::{
    ConvertAmountUseCase, GetRatesUseCase, ResolveBatchUseCase, ResolveZoneUseCase,
};
use timedesk_domain::{CanonicalReading, ProviderError, ZoneId};

// ============================================================================
// Mock time ports
// ============================================================================

pub struct TestProvider {
    name: &'static str,
}

impl TestProvider {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl TimeProvider for TestProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn endpoint(&self, zone: &ZoneId) -> String {
        format!("https://{}/{}", self.name, zone)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }

    fn normalize(&self, zone: &ZoneId, body: &[u8]) -> Result<CanonicalReading, ProviderError> {
        let value: Value =
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

/// Fetch answering from a fixed URL→body map; everything else is HTTP 404.
pub struct MapFetch {
    bodies: HashMap<String, String>,
}

impl MapFetch {
    pub fn new() -> Self {
        Self {
            bodies: HashMap::new(),
        }
    }

    /// Routes `https://<provider>/<zone>` to a `{datetime, timezone}` body.
    pub fn serve(mut self, provider: &str, zone: &str, datetime: &str) -> Self {
        self.bodies.insert(
            format!("https://{provider}/{zone}"),
            json!({"datetime": datetime, "timezone": zone}).to_string(),
        );
        self
    }
}

#[async_trait]
impl HttpFetch for MapFetch {
    async fn get(&self, url: &str, _timeout: Duration) -> Result<Bytes, ProviderError> {
        match self.bodies.get(url) {
            Some(body) => Ok(Bytes::from(body.clone())),
            None => Err(ProviderError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

// ============================================================================
// Mock rate source
// ============================================================================

pub struct StubRates {
    pub available: bool,
}

#[async_trait]
impl RateSource for StubRates {
    async fn latest(&self, base: &str) -> Result<Value, ProviderError> {
        if self.available {
            Ok(json!({"base": base, "rates": {"EUR": 0.86, "GBP": 0.74}}))
        } else {
            Err(ProviderError::Status {
                url: "https://api.exchangerate.host/latest".to_string(),
                status: 502,
            })
        }
    }

    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Value, ProviderError> {
        if self.available {
            Ok(json!({"from": from, "to": to, "amount": amount, "result": amount * 0.86}))
        } else {
            Err(ProviderError::Status {
                url: "https://api.exchangerate.host/convert".to_string(),
                status: 502,
            })
        }
    }
}

// ============================================================================
// State assembly
// ============================================================================

pub fn test_state(fetch: MapFetch, rates_available: bool) -> AppState {
    let providers: Vec<Arc<dyn TimeProvider>> = vec![
        Arc::new(TestProvider::new("primary.test")),
        Arc::new(TestProvider::new("fallback.test")),
    ];
    let fetcher: Arc<dyn HttpFetch> = Arc::new(fetch);
    let rates: Arc<dyn RateSource> = Arc::new(StubRates {
        available: rates_available,
    });

    let resolve_zone = Arc::new(ResolveZoneUseCase::new(providers, fetcher));
    AppState {
        resolve_batch: Arc::new(ResolveBatchUseCase::new(Arc::clone(&resolve_zone))),
        resolve_zone,
        get_rates: Arc::new(GetRatesUseCase::new(Arc::clone(&rates))),
        convert_amount: Arc::new(ConvertAmountUseCase::new(rates)),
    }
}
