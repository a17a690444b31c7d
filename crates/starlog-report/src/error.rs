//! Error types for the report binary.
//!
//! Every failure is fatal to the run: the report is a one-shot batch
//! pass with no retries and no partial results.

/// Errors that can abort a report run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] starlog_core::ConfigError),

    /// A store fetch failed.
    #[error("database error: {0}")]
    Db(#[from] starlog_db::DbError),

    /// The classification table failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] starlog_core::PatternError),

    /// The report artifact could not be written.
    #[error("failed to write report artifact: {0}")]
    Io(#[from] std::io::Error),
}
