//! Shared application state for the ingestion API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool the handlers write through.
//! The pool may be created lazily so the server can come up before the
//! database does; inserts then fail per-request until it is reachable.

use starlog_db::PostgresPool;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool the record store writes through.
    pub pool: PostgresPool,
}

impl AppState {
    /// Create application state around an existing pool.
    pub const fn new(pool: PostgresPool) -> Self {
        Self { pool }
    }
}
