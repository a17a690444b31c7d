//! Axum router construction for the ingestion API.
//!
//! Assembles the status page and the three write endpoints into a
//! single [`Router`] with CORS and request tracing enabled. The router
//! itself enforces the POST-only contract: a GET against a write
//! endpoint is answered with 405 before any handler runs.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the ingestion server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /repl-command` -- store a REPL command record
/// - `POST /editor-content` -- store an editor save record
/// - `POST /error` -- store an error record
///
/// CORS is configured to allow any origin so the game client can post
/// from wherever it runs.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Write endpoints
        .route("/repl-command", post(handlers::post_repl_command))
        .route("/editor-content", post(handlers::post_editor_content))
        .route("/error", post(handlers::post_error))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
