//! Timedesk Domain Layer
pub mod config;
pub mod errors;
pub mod reading;
pub mod zone;

pub use config::{Config, ConfigError};
pub use errors::{DomainError, ProviderError, ProviderFailure, ResolutionFailed};
pub use reading::{BatchResult, CanonicalReading, ZoneOutcome};
pub use zone::ZoneId;
