//! Effect descriptors produced by the rules.
//!
//! Rules return descriptors instead of calling sinks directly, so
//! tests can assert on the list without real sinks. The dispatcher
//! turns `Emit` into outbound commands (and feedback events) and the
//! rest into sink invocations.

use serde::{Deserialize, Serialize};

use crate::events::Command;

/// Notification wording selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BreakStart,
    SessionStart,
}

/// One thing the engine decided should happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Emit a derived command onto the outbound channel. Commands that
    /// change tracking/session state re-enter the event stream.
    Emit { command: Command },
    /// Play the session-done sound.
    PlaySound,
    /// Desktop notification, numbered with the upcoming cycle.
    NotifyDesktop {
        kind: NotificationKind,
        cycle_nr: u32,
    },
    /// In-app toast, numbered with the upcoming cycle.
    ShowToast {
        kind: NotificationKind,
        cycle_nr: u32,
    },
    /// Open the break modal.
    PresentBreakDialog,
    /// Forward the session progress ratio to the OS progress sink.
    SetProgressIndicator { ratio: f64 },
}

impl Effect {
    pub fn emit(command: Command) -> Self {
        Effect::Emit { command }
    }

    /// The command carried by an `Emit`, if any.
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Effect::Emit { command } => Some(command),
            _ => None,
        }
    }
}
