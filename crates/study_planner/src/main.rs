use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::PlannerConfig;
use crate::types::AppState;

mod config;
mod generation;
mod schedule;
mod server;
mod types;

#[cfg(test)]
mod test_util;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set
    _ = dotenvy::dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = PlannerConfig::from_env().context("Failed to read configuration")?;
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; /generate will return a configuration error");
    }

    let address = config.bind_address();
    info!(model = %config.model, "Starting study planner");

    let state = Arc::new(AppState::new(config).context("Failed to create generation client")?);
    let app = server::create_router(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
