//! pmboard API service
//!
//! Loads configuration, opens the database pool and keeps it until shutdown.

use anyhow::{Context, Result};
use pmboard_api::{config, db::Database};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting pmboard API");
    info!(app_port = config.app_port, "Configuration loaded");

    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };

    db.health_check()
        .await
        .context("database health check failed")?;
    info!("Database health check passed");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("Shutdown signal received");
    db.close().await;
    info!("pmboard API stopped");

    Ok(())
}
