//! Error types for the ingestion API server.
//!
//! [`IngestError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Decode problems are deliberately absent: malformed payloads are
//! accepted as zero-valued records, never rejected.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the ingestion API layer.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The record store could not persist a record.
    #[error("store error: {0}")]
    Store(#[from] starlog_db::DbError),
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not save record: {e}"),
            ),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
