pub mod exchange_rate_host;

pub use exchange_rate_host::ExchangeRateHost;
