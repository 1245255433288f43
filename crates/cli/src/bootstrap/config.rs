use timedesk_domain::Config;

/// Reads and validates the environment configuration. Called before the
/// tracing subscriber exists, so failures surface on stderr via `main`.
pub fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
