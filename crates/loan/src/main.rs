use anyhow::{Context, Result};
use loan::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("loan-service", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.run_migrations,
        config.max_connections,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool).context("Failed to create AppState")?;

    info!("🚀 Loan service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Loan service shutdown complete.");

    Ok(())
}
