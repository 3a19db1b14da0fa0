//! Covenant Relay - Serves the recruitment application endpoint
//!
//! The relay:
//! - Accepts `POST /api/apply` with a flattened application
//! - Forwards it to the configured delivery backend
//! - Optionally logs delivered applications to a spreadsheet

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use covenant_recruitment::infrastructure::config::AppConfig;
use covenant_recruitment::infrastructure::http;
use covenant_recruitment::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "covenant_recruitment=debug,covenant_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Covenant Relay");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Backend: {:?}", config.backend_kind);
    tracing::info!("  Port: {}", config.server_port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = Arc::new(AppState::new(&config));
    if !state.relay_service.is_configured() {
        tracing::warn!("Serving without a usable delivery backend, applications will be refused");
    }

    let app = http::build_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
