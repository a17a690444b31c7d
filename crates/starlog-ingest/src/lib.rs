//! Ingestion API server for Starlog telemetry.
//!
//! This crate provides the Axum HTTP surface the game client posts
//! telemetry to:
//!
//! - **`POST /repl-command`** -- a command run in the in-game REPL
//! - **`POST /editor-content`** -- a saved editor buffer
//! - **`POST /error`** -- a runtime error from the scripting environment
//! - **`GET /`** -- minimal HTML status page
//!
//! Handlers are pure plumbing: decode the JSON body leniently (garbled
//! payloads become zero-valued records, never rejections), forward the
//! record to the store, answer with an empty 200. All analysis happens
//! offline in the report run.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::IngestError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
