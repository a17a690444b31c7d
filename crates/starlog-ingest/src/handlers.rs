//! Endpoint handlers for the ingestion API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/repl-command` | Store a REPL command record |
//! | `POST` | `/editor-content` | Store an editor save record |
//! | `POST` | `/error` | Store an error record |
//!
//! The POST handlers decode leniently: a body that is not valid JSON,
//! or that is missing fields, becomes a zero-valued record. The game
//! client is best-effort telemetry; a garbled record is stored, never
//! rejected.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::de::DeserializeOwned;
use starlog_db::RecordStore;
use starlog_types::{EditorContent, ErrorInstance, RecordKind, ReplCommand};

use crate::error::IngestError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and the write
/// endpoints.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Starlog Collector</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .status { color: #3fb950; font-weight: bold; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        li::before { content: "POST "; color: #7ee787; font-weight: bold; }
    </style>
</head>
<body>
    <h1>Starlog Collector</h1>
    <p>Status: <span class="status">RUNNING</span></p>

    <h2>Write Endpoints</h2>
    <ul>
        <li>/repl-command -- {uid, timestamp, command}</li>
        <li>/editor-content -- {uid, timestamp, content}</li>
        <li>/error -- {uid, timestamp, description}</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// POST handlers
// ---------------------------------------------------------------------------

/// Store a REPL command record from the request body.
pub async fn post_repl_command(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, IngestError> {
    let record: ReplCommand = decode_lenient(&body, RecordKind::ReplCommand);
    RecordStore::new(state.pool.pool())
        .insert_command(&record)
        .await?;

    tracing::info!(uid = %record.uid, "Saved REPL command");
    Ok(StatusCode::OK)
}

/// Store an editor save record from the request body.
pub async fn post_editor_content(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, IngestError> {
    let record: EditorContent = decode_lenient(&body, RecordKind::EditorContent);
    RecordStore::new(state.pool.pool())
        .insert_editor_save(&record)
        .await?;

    tracing::info!(uid = %record.uid, "Saved editor content");
    Ok(StatusCode::OK)
}

/// Store an error record from the request body.
pub async fn post_error(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, IngestError> {
    let record: ErrorInstance = decode_lenient(&body, RecordKind::Error);
    RecordStore::new(state.pool.pool())
        .insert_error(&record)
        .await?;

    tracing::info!(uid = %record.uid, "Saved error instance");
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode a record from a request body, falling back to the zero-valued
/// record when the body is not valid JSON.
///
/// A warning is logged on fallback so garbled clients show up in the
/// logs without costing data.
fn decode_lenient<T: DeserializeOwned + Default>(body: &[u8], kind: RecordKind) -> T {
    match serde_json::from_slice(body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(kind = %kind, error = %e, "Malformed payload, storing zero-valued record");
            T::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_body_decodes() {
        let body = br#"{"uid":"u-1","timestamp":42,"command":"(help)"}"#;
        let record: ReplCommand = decode_lenient(body, RecordKind::ReplCommand);
        assert_eq!(record.uid, "u-1");
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.command, "(help)");
    }

    #[test]
    fn partial_body_fills_defaults() {
        let body = br#"{"uid":"u-1"}"#;
        let record: ErrorInstance = decode_lenient(body, RecordKind::Error);
        assert_eq!(record.uid, "u-1");
        assert_eq!(record.timestamp, 0);
        assert_eq!(record.description, "");
    }

    #[test]
    fn garbage_body_becomes_zero_valued_record() {
        let record: EditorContent = decode_lenient(b"not json at all", RecordKind::EditorContent);
        assert_eq!(record, EditorContent::default());
    }

    #[test]
    fn empty_body_becomes_zero_valued_record() {
        let record: ReplCommand = decode_lenient(b"", RecordKind::ReplCommand);
        assert_eq!(record, ReplCommand::default());
    }
}
