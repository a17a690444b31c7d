//! Data layer for the Starlog telemetry pipeline (`PostgreSQL`).
//!
//! The store is a keyed-query collaborator: the ingestion API inserts
//! records, the report run queries them back by kind and user id. The
//! analysis engine never touches the store directly -- it consumes the
//! plain record values these queries return.
//!
//! # Modules
//!
//! - [`postgres`] -- Connection pool and configuration
//! - [`record_store`] -- Insert, fetch, and count operations per record kind
//! - [`error`] -- Shared error types

pub mod error;
pub mod postgres;
pub mod record_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use record_store::{CommandRow, EditorSaveRow, ErrorRow, RecordStore};
