//! Error types for the collector binary.

/// Errors that can abort collector startup or serving.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] starlog_core::ConfigError),

    /// The database could not be reached or migrated.
    #[error("database error: {0}")]
    Db(#[from] starlog_db::DbError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] starlog_ingest::ServerError),
}
