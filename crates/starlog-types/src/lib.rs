//! Shared type definitions for the Starlog telemetry pipeline.
//!
//! This crate is the single source of truth for the record shapes that
//! travel over the ingestion wire and live in the store, and for the
//! unified event model the analysis engine works with. Both the
//! ingestion API and the report run depend on it; it depends on nothing
//! but `serde`.
//!
//! # Modules
//!
//! - [`records`] -- Wire/storage record shapes and their kind tags
//! - [`event`] -- The closed [`TelemetryEvent`] sum type and its rendering

pub mod event;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use event::TelemetryEvent;
pub use records::{EditorContent, ErrorInstance, RecordKind, ReplCommand};
