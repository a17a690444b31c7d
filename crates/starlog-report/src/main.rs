//! Offline report run for Starlog telemetry.
//!
//! Fetch-all-then-process: pulls every record collection from the
//! store, computes the corpus statistics, rebuilds each known user's
//! session timeline, and writes the session artifact. Any fetch failure
//! aborts the run.
//!
//! # Run Sequence
//!
//! 1. Load configuration from `starlog.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `PostgreSQL`
//! 4. Compile the classification table
//! 5. Error-frequency histogram over all error records
//! 6. `VariableHasNoValue` ranking over all error records
//! 7. Known-user universe and editor adoption
//! 8. Rebuild per-user sessions, tally command/error pairings, and
//!    write the session artifact

mod error;

use std::collections::BTreeSet;
use std::path::Path;

use starlog_core::{ErrorPatterns, Session, StarlogConfig};
use starlog_db::{PostgresConfig, PostgresPool, RecordStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReportError;

/// Path of the canonical configuration file.
const CONFIG_PATH: &str = "starlog.yaml";

/// Application entry point for the report run.
///
/// # Errors
///
/// Returns an error if configuration, any store fetch, or writing the
/// artifact fails.
#[tokio::main]
async fn main() -> Result<(), ReportError> {
    // 1. Load configuration.
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

    info!("starlog-report starting");

    // 3. Connect to PostgreSQL.
    let pg_config = PostgresConfig::new(&config.infrastructure.postgres_url);
    let pool = PostgresPool::connect(&pg_config).await?;
    let store = RecordStore::new(pool.pool());

    // 4. Compile the classification table.
    let patterns = ErrorPatterns::new()?;

    // 5. Error-frequency histogram.
    let errors = store.fetch_errors().await?;
    info!(count = errors.len(), "Fetched error instances");

    let histogram = starlog_core::error_type_histogram(&patterns, &errors);
    info!("--- Error Frequency ---");
    for (category, count) in &histogram {
        info!(category = %category, count, "error type");
    }

    // 6. VariableHasNoValue ranking.
    let ranking = starlog_core::variable_no_value_ranking(&patterns, &errors);
    info!("--- VariableHasNoValue top variables ---");
    for entry in &ranking {
        info!(variable = %entry.variable, count = entry.count, "variable with no value");
    }

    // 7. Known-user universe and editor adoption.
    let commands = store.fetch_commands().await?;
    let uids = starlog_core::distinct_uids(&commands);

    let mut uids_with_saves = BTreeSet::new();
    for uid in &uids {
        if store.count_editor_saves(uid).await? > 0 {
            uids_with_saves.insert(uid.clone());
        }
    }
    let adoption = starlog_core::editor_adoption(&uids, &uids_with_saves);
    info!(
        users_with_editor = adoption.users_with_editor,
        total_users = adoption.total_users,
        "Editor adoption"
    );

    // 8. Rebuild per-user sessions and write the artifact.
    let mut report_text = String::new();
    let mut commands_with_errors: u64 = 0;
    for uid in &uids {
        let session = Session::build(
            uid.clone(),
            store.fetch_errors_for_user(uid).await?,
            store.fetch_commands_for_user(uid).await?,
            store.fetch_editor_saves_for_user(uid).await?,
        );

        commands_with_errors = commands_with_errors.saturating_add(
            u64::try_from(
                session
                    .command_error_pairs()
                    .iter()
                    .filter(|pair| pair.command.is_some() && pair.error.is_some())
                    .count(),
            )
            .unwrap_or(u64::MAX),
        );

        report_text.push_str(&starlog_core::render_session(&session));
    }
    info!(commands_with_errors, "Command/error pairings tallied");

    std::fs::write(Path::new(&config.report.sessions_path), report_text)?;
    info!(path = config.report.sessions_path, "Wrote session report");

    pool.close().await;
    Ok(())
}

/// Load the configuration file, falling back to defaults (plus
/// environment overrides) when it does not exist.
fn load_config() -> Result<StarlogConfig, ReportError> {
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
