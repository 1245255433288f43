use super::ConfigError;
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_address: String,
}

impl ServerConfig {
    pub(super) fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("PORT") {
            config.port = raw
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvVar {
                    name: "PORT",
                    value: raw,
                    reason: e.to_string(),
                })?;
        }
        if let Ok(raw) = env::var("BIND_ADDRESS") {
            config.bind_address = raw;
        }

        Ok(config)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "PORT",
                value: "0".to_string(),
                reason: "port must be non-zero".to_string(),
            });
        }
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS",
                value: self.bind_address.clone(),
                reason: "bind address cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}
