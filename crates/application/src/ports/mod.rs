pub mod http_fetch;
pub mod rate_source;
pub mod time_provider;

pub use http_fetch::HttpFetch;
pub use rate_source::RateSource;
pub use time_provider::TimeProvider;
