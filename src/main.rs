use anyhow::{Context, Result};
use thuto::configuration::get_configuration;
use thuto::routes::get_router;
use thuto::telemetry::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().context("Failed to initialize tracing.")?;
    let config = get_configuration().context("Failed to read Configuration.")?;

    let bind_addr = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .context(format!("Failed to bind to address: {bind_addr}"))?;

    tracing::info!("Listening on {bind_addr}");

    axum::serve(listener, get_router())
        .await
        .context("Failed to serve application using axum")?;

    Ok(())
}
