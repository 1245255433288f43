pub mod logging;
pub mod server;

pub use logging::LoggingConfig;
pub use server::ServerConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name} value '{value}': {reason}")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration. Read from the environment only: the service takes
/// no config file and no CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Environment variables: `PORT` (default 5000), `BIND_ADDRESS`
    /// (default 0.0.0.0), `LOG_LEVEL` (default info).
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logging.validate()
    }
}
