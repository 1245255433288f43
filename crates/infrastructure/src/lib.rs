//! Timedesk Infrastructure Layer
//!
//! Reqwest-backed adapters for the application ports: the shared HTTP
//! fetcher, the concrete time providers, and the currency-rate client.
pub mod currency;
pub mod http;
pub mod time;

pub use currency::ExchangeRateHost;
pub use http::ReqwestFetcher;
pub use time::default_providers;
