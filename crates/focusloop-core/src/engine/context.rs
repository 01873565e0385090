//! Point-in-time snapshots the rules evaluate against.
//!
//! Rules never subscribe to live state. The dispatcher reads one fresh
//! snapshot per event tick and hands every rule the same read-only
//! view, so all guards within one evaluation observe a consistent
//! point in time.

use crate::storage::PomodoroConfig;
use crate::tracking::TaskId;

/// Derived session state, recomputed by the external timer driver.
/// The engine only reads it; `is_break` and `is_manual_pause` are not
/// assumed to change atomically together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub is_break: bool,
    /// Paused awaiting explicit user continuation.
    pub is_manual_pause: bool,
    /// Completed work cycles, used for notification numbering.
    pub current_cycle: u32,
    /// Progress through the current session, 0.0 .. 1.0.
    pub progress: f64,
}

/// Where the dispatcher gets its per-event snapshots from.
///
/// `config` returns `None` when configuration has not been loaded yet;
/// the engine treats that as "feature disabled".
pub trait SnapshotSource {
    fn config(&self) -> Option<PomodoroConfig>;
    fn session(&self) -> SessionSnapshot;
}

/// Everything a rule may read during one evaluation.
#[derive(Debug, Clone)]
pub struct EvalContext {
    pub config: Option<PomodoroConfig>,
    pub session: SessionSnapshot,
    pub current_task_id: Option<TaskId>,
}

impl EvalContext {
    /// The shared enablement guard. Missing config counts as disabled.
    pub fn is_enabled(&self) -> bool {
        self.config.as_ref().is_some_and(|c| c.is_enabled)
    }
}
