//! # Timedesk Server
//!
//! Backend proxy for the world-clock UI: multi-provider time resolution
//! with ordered fallback, plus a currency-rate passthrough.

mod bootstrap;
mod di;
mod server;

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bootstrap::load_config()?;
    bootstrap::init_logging(&config);

    tracing::info!(
        port = config.server.port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let state = di::build_state();
    let app = server::create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
