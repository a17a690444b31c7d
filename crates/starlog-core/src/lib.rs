//! Session reconstruction and event-classification engine for Starlog.
//!
//! The engine takes the unordered bag of heterogeneous telemetry records
//! the store returns and turns it into the two products of a report run:
//! per-user session timelines (with command/error pairings) and
//! corpus-wide statistics. Everything here is pure, synchronous, and
//! value-like: fetch-all-then-process, no shared mutable state, every
//! entity rebuilt per run.
//!
//! # Modules
//!
//! - [`classify`] -- Ordered first-match-wins error classification
//! - [`session`] -- Timeline merge and command/error pairing
//! - [`aggregate`] -- Histogram, variable ranking, editor adoption
//! - [`report`] -- Session report text rendering
//! - [`config`] -- Typed YAML configuration shared by the binaries

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod report;
pub mod session;

// Re-export primary types for convenience.
pub use aggregate::{
    distinct_uids, editor_adoption, error_type_histogram, variable_no_value_ranking,
    EditorAdoption, VariableNoValueCount,
};
pub use classify::{ErrorCategory, ErrorPatterns, PatternError};
pub use config::{ConfigError, StarlogConfig};
pub use report::{render_session, render_sessions};
pub use session::{CommandErrorPair, Session};
