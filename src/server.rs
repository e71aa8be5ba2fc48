//! Service startup shared by the three binaries.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Build the HTTP router for the service
//! 4. Start the server on the configured port
//!
//! No database connection is opened at startup; each request opens its own.

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, Service},
    db::Database,
    routes,
    state::AppState,
};

/// Initialize logging with tracing subscriber. Reads RUST_LOG (defaults to "info").
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Run one service until the listener fails.
pub async fn run(service: Service) -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env(service)?;
    tracing::info!(
        service = service.name(),
        database = ?config.database,
        wallet_enabled = config.wallet_enabled,
        "Configuration loaded"
    );

    let db = Database::new(config.database.connect_options());
    let app = routes::build_router(AppState::new(service, db), config.wallet_enabled);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(service = service.name(), "Server listening on {}", addr);

    // Handles requests concurrently on the tokio runtime until the process stops
    axum::serve(listener, app).await?;

    Ok(())
}
