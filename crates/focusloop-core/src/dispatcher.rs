//! Event dispatch loop.
//!
//! Single-threaded, sequential, FIFO. One external event is taken at a
//! time; the rules run against a snapshot read at that moment, and any
//! command they emit that changes tracking/session state is enqueued
//! as a new event on the same stream rather than evaluated in-line.
//! That keeps rule evaluation non-reentrant and the command order
//! deterministic.

use std::collections::VecDeque;

use crate::engine::{Effect, EvalContext, ReactionEngine, SnapshotSource};
use crate::events::{Command, SessionEvent};
use crate::sinks::EffectSinks;
use crate::tracking::TaskTrackingLink;

/// Owns the inbound queue, the tracking link and the sinks; drives the
/// engine one event at a time.
pub struct Dispatcher<S: SnapshotSource, K: EffectSinks> {
    engine: ReactionEngine,
    source: S,
    sinks: K,
    tracking: TaskTrackingLink,
    queue: VecDeque<SessionEvent>,
}

impl<S: SnapshotSource, K: EffectSinks> Dispatcher<S, K> {
    pub fn new(source: S, sinks: K) -> Self {
        Self {
            engine: ReactionEngine::new(),
            source,
            sinks,
            tracking: TaskTrackingLink::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn tracking(&self) -> &TaskTrackingLink {
        &self.tracking
    }

    pub fn sinks(&self) -> &K {
        &self.sinks
    }

    pub fn sinks_mut(&mut self) -> &mut K {
        &mut self.sinks
    }

    /// Process one external event plus everything it cascades into.
    /// Returns the outbound commands in emission order.
    pub fn dispatch(&mut self, event: SessionEvent) -> Vec<Command> {
        self.queue.push_back(event);
        let mut outbound = Vec::new();
        while let Some(event) = self.queue.pop_front() {
            self.sync_tracking(&event);
            let ctx = self.snapshot();
            for effect in self.engine.evaluate(&event, &ctx) {
                self.apply(effect, &mut outbound);
            }
        }
        outbound
    }

    /// Forward a progress-ratio update from the timer driver.
    pub fn progress_update(&mut self, ratio: f64) {
        if !self.sinks.supports_progress_indicator() {
            return;
        }
        let ctx = self.snapshot();
        if let Some(effect) = self.engine.on_progress(ratio, &ctx) {
            let mut ignored = Vec::new();
            self.apply(effect, &mut ignored);
        }
    }

    /// Tracking-change notifications mean the task store already
    /// changed; mirror that into the link before the rules read it.
    fn sync_tracking(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TaskTrackingStarted { task_id } => {
                self.tracking.set_current_task(task_id.clone());
            }
            SessionEvent::TaskTrackingStopped => self.tracking.unset_current_task(),
            _ => {}
        }
    }

    /// One fresh point-in-time view per event tick.
    fn snapshot(&self) -> EvalContext {
        EvalContext {
            config: self.source.config(),
            session: self.source.session(),
            current_task_id: self.tracking.current_task_id().cloned(),
        }
    }

    fn apply(&mut self, effect: Effect, outbound: &mut Vec<Command>) {
        match effect {
            Effect::Emit { command } => self.emit(command, outbound),
            Effect::PlaySound => {
                self.run_sink("sound", |s| s.play_completion_sound());
            }
            Effect::NotifyDesktop { kind, cycle_nr } => {
                self.run_sink("desktop-notification", |s| s.notify_desktop(kind, cycle_nr));
            }
            Effect::ShowToast { kind, cycle_nr } => {
                self.run_sink("toast", |s| s.show_toast(kind, cycle_nr));
            }
            Effect::PresentBreakDialog => {
                self.run_sink("break-dialog", |s| s.present_break_dialog());
            }
            Effect::SetProgressIndicator { ratio } => {
                self.run_sink("progress-indicator", |s| s.set_progress_indicator(ratio));
            }
        }
    }

    /// Push a command to the outbound channel and enqueue the event it
    /// re-enters the stream as. Tracking commands take effect when
    /// their change notification is processed, not in-line, so rules
    /// evaluating the current event keep their snapshot.
    fn emit(&mut self, command: Command, outbound: &mut Vec<Command>) {
        match &command {
            Command::PauseTimer { is_break_end_pause } => {
                self.queue.push_back(SessionEvent::SessionPaused {
                    is_break_end_pause: *is_break_end_pause,
                });
            }
            Command::SetCurrentTask { task_id } => {
                // The link only notifies on an actual change.
                if self.tracking.current_task_id() != Some(task_id) {
                    self.queue.push_back(SessionEvent::TaskTrackingStarted {
                        task_id: task_id.clone(),
                    });
                }
            }
            Command::UnsetCurrentTask => {
                if self.tracking.current_task_id().is_some() {
                    self.queue.push_back(SessionEvent::TaskTrackingStopped);
                }
            }
            Command::StartTimer | Command::StopTimer | Command::ToggleGeneralTracking => {}
        }
        outbound.push(command);
    }

    fn run_sink<F>(&mut self, label: &str, f: F)
    where
        F: FnOnce(&mut K) -> Result<(), Box<dyn std::error::Error>>,
    {
        if let Err(e) = f(&mut self.sinks) {
            tracing::warn!(sink = label, error = %e, "side-effect sink failed");
        }
    }
}
