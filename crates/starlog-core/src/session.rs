//! Per-user session reconstruction and command/error pairing.
//!
//! A session is a user's records across all three kinds merged into one
//! chronologically ordered timeline. Sessions are built fresh per report
//! run from whatever the store returned; nothing here is persisted.
//!
//! Pairing walks the timeline once, associating each command with the
//! error (if any) that followed it before the next command. An error
//! with no preceding command pairs with an absent command rather than
//! failing -- players can hit errors from editor-loaded code before ever
//! touching the REPL.

use starlog_types::{EditorContent, ErrorInstance, ReplCommand, TelemetryEvent};

/// A user's events merged into one chronological timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    uid: String,
    events: Vec<TelemetryEvent>,
}

impl Session {
    /// Build a session from a user's records.
    ///
    /// The three collections are concatenated, tagged, and stable-sorted
    /// ascending by timestamp. Records sharing a timestamp keep their
    /// fetch order, so identical input always yields an identical
    /// timeline. No filtering happens here: a user with zero records
    /// yields an empty session, not an error.
    pub fn build(
        uid: String,
        errors: Vec<ErrorInstance>,
        commands: Vec<ReplCommand>,
        editor_saves: Vec<EditorContent>,
    ) -> Self {
        let capacity = errors
            .len()
            .saturating_add(commands.len())
            .saturating_add(editor_saves.len());
        let mut events = Vec::with_capacity(capacity);
        events.extend(errors.into_iter().map(TelemetryEvent::Error));
        events.extend(commands.into_iter().map(TelemetryEvent::Command));
        events.extend(editor_saves.into_iter().map(TelemetryEvent::EditorSave));

        // sort_by_key is stable: ties keep insertion order.
        events.sort_by_key(TelemetryEvent::timestamp);

        Self { uid, events }
    }

    /// Return the user id this session belongs to.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Return the ordered event timeline.
    pub fn events(&self) -> &[TelemetryEvent] {
        &self.events
    }

    /// Return whether the session has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Derive command/error pairs from the timeline.
    ///
    /// A single left-to-right scan maintains a pending-command slot:
    ///
    /// - a command first flushes any pending command as completed
    ///   without an error, then becomes pending itself;
    /// - an error pairs with the pending command (or with no command if
    ///   the slot is empty) and clears the slot;
    /// - editor saves are passed over.
    ///
    /// A trailing pending command with nothing following it is not
    /// emitted.
    pub fn command_error_pairs(&self) -> Vec<CommandErrorPair> {
        let mut pairs = Vec::new();
        let mut pending: Option<ReplCommand> = None;

        for event in &self.events {
            match event {
                TelemetryEvent::Command(cmd) => {
                    if let Some(completed) = pending.take() {
                        pairs.push(CommandErrorPair {
                            command: Some(completed),
                            error: None,
                        });
                    }
                    pending = Some(cmd.clone());
                }
                TelemetryEvent::Error(err) => {
                    pairs.push(CommandErrorPair {
                        command: pending.take(),
                        error: Some(err.clone()),
                    });
                }
                TelemetryEvent::EditorSave(_) => {}
            }
        }

        pairs
    }
}

/// A command associated with the error (if any) that followed it before
/// the next command interrupted the sequence.
///
/// Both sides are optional: a command that completed without an error
/// has no error, and an error raised before any command has no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandErrorPair {
    /// The command, absent when an error preceded every command.
    pub command: Option<ReplCommand>,
    /// The error, absent when the command was superseded cleanly.
    pub error: Option<ErrorInstance>,
}
