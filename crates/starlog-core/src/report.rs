//! Session report rendering.
//!
//! The report run renders every user's timeline into one text artifact.
//! Each event renders on its own line (editor saves as a multi-line
//! block); events are separated by newlines. Iteration order over users
//! is whatever the caller hands in -- the store's fetch order already
//! guarantees determinism within a user.

use starlog_types::TelemetryEvent;

use crate::session::Session;

/// Render a sequence of sessions into the report text.
///
/// Every event is rendered via its `Display` impl and terminated with a
/// newline, matching the line-per-event artifact the ops tooling
/// expects.
pub fn render_sessions(sessions: &[Session]) -> String {
    let mut out = String::new();
    for session in sessions {
        for event in session.events() {
            render_event(&mut out, event);
        }
    }
    out
}

/// Render a single session into the report text.
pub fn render_session(session: &Session) -> String {
    let mut out = String::new();
    for event in session.events() {
        render_event(&mut out, event);
    }
    out
}

fn render_event(out: &mut String, event: &TelemetryEvent) {
    out.push_str(&event.to_string());
    out.push('\n');
}
