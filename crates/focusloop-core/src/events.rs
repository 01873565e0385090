use serde::{Deserialize, Serialize};

use crate::tracking::TaskId;

/// Every occurrence the reaction engine can react to.
///
/// Events arrive on a single ordered stream and are processed one at a
/// time, in arrival order. Commands emitted by a rule are enqueued on
/// the same stream (see [`crate::Dispatcher`]), never processed in-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A task became the currently tracked task.
    TaskTrackingStarted { task_id: TaskId },
    /// The currently tracked task was unset.
    TaskTrackingStopped,
    /// A work or break session ran to completion.
    SessionFinished {
        /// When set, the session driver asked not to auto-resume
        /// general time tracking.
        is_dont_resume: bool,
    },
    /// The session timer was paused.
    SessionPaused {
        /// Pause issued at the end of a break (manual-continue mode).
        is_break_end_pause: bool,
    },
    /// The pomodoro cycle was stopped outright, e.g. when the feature
    /// is being switched off.
    SessionStopped,
}

/// Derived commands emitted by the reaction engine for consumption by
/// the session driver and the task-tracking store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    StartTimer,
    PauseTimer { is_break_end_pause: bool },
    StopTimer,
    /// Resume general (non-pomodoro) time tracking.
    ToggleGeneralTracking,
    SetCurrentTask { task_id: TaskId },
    UnsetCurrentTask,
}
