//! Wire and storage record shapes for the three telemetry kinds.
//!
//! Every record is a flat object carrying an opaque user id, a
//! caller-supplied epoch timestamp, and one kind-specific content field.
//! All fields default when absent: the ingestion surface deliberately
//! accepts garbled payloads as zero-valued records rather than rejecting
//! them, so decoding must never fail on missing fields.

use serde::{Deserialize, Serialize};

/// Storage kind tag for a telemetry record.
///
/// The string forms are stable identifiers shared with the game
/// client; changing one orphans every record already stored under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    /// A command run in the in-game REPL.
    ReplCommand,
    /// A full editor buffer saved by the player.
    EditorContent,
    /// A runtime error raised by the scripting environment.
    Error,
}

impl RecordKind {
    /// Return the stable string tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReplCommand => "REPLCommand",
            Self::EditorContent => "EditorContent",
            Self::Error => "Error",
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command the player ran in the in-game REPL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplCommand {
    /// Opaque identifier for the player's session.
    pub uid: String,
    /// Caller-supplied epoch timestamp in milliseconds.
    pub timestamp: i64,
    /// The command text as typed.
    pub command: String,
}

/// A full editor buffer the player saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorContent {
    /// Opaque identifier for the player's session.
    pub uid: String,
    /// Caller-supplied epoch timestamp in milliseconds.
    pub timestamp: i64,
    /// The complete buffer content at save time.
    pub content: String,
}

/// A runtime error raised by the scripting environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorInstance {
    /// Opaque identifier for the player's session.
    pub uid: String,
    /// Caller-supplied epoch timestamp in milliseconds.
    pub timestamp: i64,
    /// Free-text error description produced by the interpreter.
    pub description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_stable() {
        assert_eq!(RecordKind::ReplCommand.as_str(), "REPLCommand");
        assert_eq!(RecordKind::EditorContent.as_str(), "EditorContent");
        assert_eq!(RecordKind::Error.as_str(), "Error");
    }

    #[test]
    fn repl_command_roundtrip() {
        let cmd = ReplCommand {
            uid: "u-1".to_owned(),
            timestamp: 1_000,
            command: "(engage-thruster 1)".to_owned(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let restored: ReplCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cmd);
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        // The collector accepts partial payloads as zero-valued records.
        let cmd: ReplCommand = serde_json::from_str("{}").unwrap();
        assert_eq!(cmd.uid, "");
        assert_eq!(cmd.timestamp, 0);
        assert_eq!(cmd.command, "");

        let err: ErrorInstance = serde_json::from_str(r#"{"uid":"u-2"}"#).unwrap();
        assert_eq!(err.uid, "u-2");
        assert_eq!(err.timestamp, 0);
        assert_eq!(err.description, "");
    }
}
