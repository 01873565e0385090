//! Task-tracking link.
//!
//! Holds the identifier of the task currently being time-tracked. The
//! reaction engine never mutates this directly; it emits
//! `SetCurrentTask`/`UnsetCurrentTask` commands which the dispatcher
//! applies here.

use serde::{Deserialize, Serialize};

/// Opaque task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The "currently tracked task" store. At most one task is tracked at
/// a time; setting a new one replaces the previous.
#[derive(Debug, Clone, Default)]
pub struct TaskTrackingLink {
    current: Option<TaskId>,
}

impl TaskTrackingLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_task_id(&self) -> Option<&TaskId> {
        self.current.as_ref()
    }

    pub fn set_current_task(&mut self, task_id: TaskId) {
        self.current = Some(task_id);
    }

    pub fn unset_current_task(&mut self) {
        self.current = None;
    }
}
