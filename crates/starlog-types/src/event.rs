//! The unified telemetry event model.
//!
//! [`TelemetryEvent`] is a closed sum over the three record kinds so the
//! session builder can hold a heterogeneous, chronologically ordered
//! sequence and sort or render it without downcasting. Matching is
//! exhaustive; adding a record kind is a compile error until every
//! consumer handles it.

use crate::records::{EditorContent, ErrorInstance, ReplCommand};

/// A single timestamped occurrence tied to a user: an error, a REPL
/// command, or an editor save.
///
/// The `Display` rendering is the line format written to the session
/// report:
///
/// - errors render as `Error: <description>`
/// - commands render as `REPL : <command>`
/// - editor saves render as `Editor:` followed by each buffer line
///   indented by four spaces, newline-terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    /// A runtime error raised by the scripting environment.
    Error(ErrorInstance),
    /// A command run in the in-game REPL.
    Command(ReplCommand),
    /// A full editor buffer saved by the player.
    EditorSave(EditorContent),
}

impl TelemetryEvent {
    /// Return the caller-supplied epoch timestamp of this event.
    pub const fn timestamp(&self) -> i64 {
        match self {
            Self::Error(e) => e.timestamp,
            Self::Command(c) => c.timestamp,
            Self::EditorSave(s) => s.timestamp,
        }
    }

    /// Return the user id this event belongs to.
    pub fn uid(&self) -> &str {
        match self {
            Self::Error(e) => &e.uid,
            Self::Command(c) => &c.uid,
            Self::EditorSave(s) => &s.uid,
        }
    }

    /// Return the kind-specific payload text: the error description,
    /// the command text, or the full editor buffer.
    pub fn payload(&self) -> &str {
        match self {
            Self::Error(e) => &e.description,
            Self::Command(c) => &c.command,
            Self::EditorSave(s) => &s.content,
        }
    }
}

impl core::fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Error(e) => write!(f, "Error: {}", e.description),
            Self::Command(c) => write!(f, "REPL : {}", c.command),
            Self::EditorSave(s) => {
                writeln!(f, "Editor:")?;
                for line in s.content.split('\n') {
                    writeln!(f, "    {line}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn error_at(timestamp: i64, description: &str) -> TelemetryEvent {
        TelemetryEvent::Error(ErrorInstance {
            uid: "u-1".to_owned(),
            timestamp,
            description: description.to_owned(),
        })
    }

    fn command_at(timestamp: i64, command: &str) -> TelemetryEvent {
        TelemetryEvent::Command(ReplCommand {
            uid: "u-1".to_owned(),
            timestamp,
            command: command.to_owned(),
        })
    }

    fn save_at(timestamp: i64, content: &str) -> TelemetryEvent {
        TelemetryEvent::EditorSave(EditorContent {
            uid: "u-1".to_owned(),
            timestamp,
            content: content.to_owned(),
        })
    }

    #[test]
    fn error_renders_with_prefix() {
        let event = error_at(1, "Too many arguments");
        assert_eq!(event.to_string(), "Error: Too many arguments");
    }

    #[test]
    fn command_renders_with_prefix() {
        let event = command_at(1, "(toggle-switch 3)");
        assert_eq!(event.to_string(), "REPL : (toggle-switch 3)");
    }

    #[test]
    fn editor_save_renders_indented_block() {
        let event = save_at(1, "(define x 1)\n(define y 2)");
        assert_eq!(
            event.to_string(),
            "Editor:\n    (define x 1)\n    (define y 2)\n"
        );
    }

    #[test]
    fn empty_editor_save_renders_one_blank_line() {
        let event = save_at(1, "");
        assert_eq!(event.to_string(), "Editor:\n    \n");
    }

    #[test]
    fn accessors_cover_all_variants() {
        let events = [
            error_at(3, "boom"),
            command_at(1, "(help)"),
            save_at(2, "buffer"),
        ];
        let timestamps: Vec<i64> = events.iter().map(TelemetryEvent::timestamp).collect();
        assert_eq!(timestamps, vec![3, 1, 2]);

        let payloads: Vec<&str> = events.iter().map(TelemetryEvent::payload).collect();
        assert_eq!(payloads, vec!["boom", "(help)", "buffer"]);

        assert!(events.iter().all(|e| e.uid() == "u-1"));
    }

    #[test]
    fn heterogeneous_sequence_sorts_by_timestamp() {
        let mut events = vec![
            error_at(3, "boom"),
            command_at(1, "(help)"),
            save_at(2, "buffer"),
        ];
        events.sort_by_key(TelemetryEvent::timestamp);
        let order: Vec<i64> = events.iter().map(TelemetryEvent::timestamp).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
