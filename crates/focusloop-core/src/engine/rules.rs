//! The reaction rule table.
//!
//! Each rule is an independent reaction: a filter on the incoming
//! event plus guards over the snapshot context, producing zero or more
//! effect descriptors. Several rules may fire for the same event. The
//! table is ordered, but rules must not rely on each other's output
//! within the same tick -- emitted commands re-enter the stream as new
//! events instead.

use crate::engine::context::EvalContext;
use crate::engine::effect::{Effect, NotificationKind};
use crate::events::{Command, SessionEvent};

/// One entry of the reaction table.
pub struct Rule {
    pub name: &'static str,
    /// Composed enablement guard: when set, the rule is skipped unless
    /// `PomodoroConfig::is_enabled` holds in the current snapshot.
    /// Rules that must keep working while the feature is being
    /// disabled opt out.
    pub requires_enabled: bool,
    pub apply: fn(&SessionEvent, &EvalContext) -> Vec<Effect>,
}

/// The full table, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "tracking-follows-current-task",
        requires_enabled: true,
        apply: tracking_follows_current_task,
    },
    Rule {
        name: "auto-resume-after-session",
        requires_enabled: true,
        apply: auto_resume_after_session,
    },
    Rule {
        name: "unset-task-on-stop",
        requires_enabled: false,
        apply: unset_task_on_stop,
    },
    Rule {
        name: "stop-tracking-entering-break",
        requires_enabled: true,
        apply: stop_tracking_entering_break,
    },
    Rule {
        name: "stop-tracking-on-pause",
        requires_enabled: true,
        apply: stop_tracking_on_pause,
    },
    Rule {
        name: "sound-on-completion",
        requires_enabled: true,
        apply: sound_on_completion,
    },
    Rule {
        name: "break-dialog",
        requires_enabled: false,
        apply: break_dialog,
    },
    Rule {
        name: "session-start-notification",
        requires_enabled: false,
        apply: session_start_notification,
    },
];

/// Start the pomodoro timer when a task becomes tracked, pause it when
/// tracking stops. Entirely suppressed while on break with
/// stop-tracking-on-break active: no transition at all then, not even
/// a pause.
fn tracking_follows_current_task(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let started = match event {
        SessionEvent::TaskTrackingStarted { .. } => true,
        SessionEvent::TaskTrackingStopped => false,
        _ => return Vec::new(),
    };
    let Some(cfg) = ctx.config.as_ref() else {
        return Vec::new();
    };
    if ctx.session.is_break && cfg.is_stop_tracking_on_break {
        return Vec::new();
    }
    if started {
        vec![Effect::emit(Command::StartTimer)]
    } else {
        vec![Effect::emit(Command::PauseTimer {
            is_break_end_pause: false,
        })]
    }
}

/// Resume general time tracking after a work session finishes, unless
/// the session asked not to, a task is already tracked, or we just
/// entered a break.
fn auto_resume_after_session(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let SessionEvent::SessionFinished { is_dont_resume } = event else {
        return Vec::new();
    };
    if !ctx.session.is_break && ctx.current_task_id.is_none() && !is_dont_resume {
        vec![Effect::emit(Command::ToggleGeneralTracking)]
    } else {
        Vec::new()
    }
}

/// An explicit stop always unsets the current task. No enablement
/// guard: stopping is often the result of disabling the feature, and
/// the task must be released anyway.
fn unset_task_on_stop(event: &SessionEvent, _ctx: &EvalContext) -> Vec<Effect> {
    match event {
        SessionEvent::SessionStopped => vec![Effect::emit(Command::UnsetCurrentTask)],
        _ => Vec::new(),
    }
}

/// Suspend time tracking for the duration of a break.
fn stop_tracking_entering_break(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let SessionEvent::SessionFinished { .. } = event else {
        return Vec::new();
    };
    let Some(cfg) = ctx.config.as_ref() else {
        return Vec::new();
    };
    if cfg.is_stop_tracking_on_break && ctx.session.is_break {
        vec![Effect::emit(Command::UnsetCurrentTask)]
    } else {
        Vec::new()
    }
}

/// Pausing the timer releases the tracked task, if any.
fn stop_tracking_on_pause(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let SessionEvent::SessionPaused { .. } = event else {
        return Vec::new();
    };
    if ctx.current_task_id.is_some() {
        vec![Effect::emit(Command::UnsetCurrentTask)]
    } else {
        Vec::new()
    }
}

/// Play the session-done sound at session/break boundaries.
///
/// The finished-session predicate is intentionally asymmetric:
/// `is_play_sound` covers the work-to-break transition (we are on
/// break when the finish event lands), `is_play_sound_after_break`
/// covers break-to-work but only when breaks auto-continue. A pause
/// flagged as break-end plays unconditionally.
fn sound_on_completion(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let Some(cfg) = ctx.config.as_ref() else {
        return Vec::new();
    };
    let is_break = ctx.session.is_break;
    let play = match event {
        SessionEvent::SessionFinished { .. } => {
            (cfg.is_play_sound && is_break)
                || (cfg.is_play_sound_after_break && !cfg.is_manual_continue && !is_break)
        }
        SessionEvent::SessionPaused { is_break_end_pause } => *is_break_end_pause,
        _ => false,
    };
    if play {
        vec![Effect::PlaySound]
    } else {
        Vec::new()
    }
}

/// Open the break modal whenever a session finishes into a break. The
/// presenter is responsible for not stacking duplicate dialogs.
fn break_dialog(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    match event {
        SessionEvent::SessionFinished { .. } if ctx.session.is_break => {
            vec![Effect::PresentBreakDialog]
        }
        _ => Vec::new(),
    }
}

/// Announce the next interval. The desktop notification always fires
/// on session finish; the in-app toast additionally requires not being
/// on break and not being manually paused.
fn session_start_notification(event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
    let SessionEvent::SessionFinished { .. } = event else {
        return Vec::new();
    };
    let cycle_nr = ctx.session.current_cycle + 1;
    let kind = if ctx.session.is_break {
        NotificationKind::BreakStart
    } else {
        NotificationKind::SessionStart
    };
    let mut effects = vec![Effect::NotifyDesktop { kind, cycle_nr }];
    if !ctx.session.is_break && !ctx.session.is_manual_pause {
        effects.push(Effect::ShowToast {
            kind: NotificationKind::SessionStart,
            cycle_nr,
        });
    }
    effects
}
