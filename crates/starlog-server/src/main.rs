//! Collector binary for Starlog telemetry.
//!
//! Serves the ingestion API the game client posts telemetry to. Loads
//! configuration, connects to `PostgreSQL`, applies migrations, and
//! serves until terminated.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `starlog.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Serve the ingestion API

mod error;

use std::path::Path;
use std::sync::Arc;

use starlog_core::StarlogConfig;
use starlog_db::{PostgresConfig, PostgresPool};
use starlog_ingest::{AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CollectorError;

/// Path of the canonical configuration file.
const CONFIG_PATH: &str = "starlog.yaml";

/// Application entry point for the collector.
///
/// # Errors
///
/// Returns an error if configuration, database setup, or serving fails.
#[tokio::main]
async fn main() -> Result<(), CollectorError> {
    // 1. Load configuration. A missing file is fine: every section has
    //    defaults and the environment can still override.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the
    //    configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_target(true)
        .init();

    info!("starlog-server starting");
    info!(
        api_host = config.infrastructure.api_host,
        api_port = config.infrastructure.api_port,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and run migrations.
    let pg_config = PostgresConfig::new(&config.infrastructure.postgres_url);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Serve the ingestion API until terminated.
    let state = Arc::new(AppState::new(pool));
    let server_config = ServerConfig {
        host: config.infrastructure.api_host,
        port: config.infrastructure.api_port,
    };
    starlog_ingest::start_server(&server_config, state).await?;

    Ok(())
}

/// Load the configuration file, falling back to defaults (plus
/// environment overrides) when it does not exist.
fn load_config() -> Result<StarlogConfig, CollectorError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(StarlogConfig::from_file(path)?)
    } else {
        info!(path = CONFIG_PATH, "No config file, using defaults");
        let mut config = StarlogConfig::default();
        config.infrastructure.apply_env_overrides();
        Ok(config)
    }
}
