// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::progress_service::ProgressService;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::system_clock::SystemClock;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_server_config()?;

    // Initialize tracing; RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create services (application layer)
    let progress_service = ProgressService::new(Arc::new(SystemClock));

    // Create application state
    let state = Arc::new(AppState { progress_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting year-progress-svg service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
