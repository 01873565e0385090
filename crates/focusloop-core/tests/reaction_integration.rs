//! End-to-end coverage of the dispatch loop: external events in,
//! commands and sink calls out, with config/session snapshots changing
//! between events.

use std::cell::RefCell;
use std::rc::Rc;

use focusloop_core::engine::{NotificationKind, SessionSnapshot, SnapshotSource};
use focusloop_core::{
    Command, Dispatcher, EffectSinks, PomodoroConfig, SessionEvent, TaskId,
};

#[derive(Clone, Default)]
struct SharedSource {
    config: Rc<RefCell<Option<PomodoroConfig>>>,
    session: Rc<RefCell<SessionSnapshot>>,
}

impl SharedSource {
    fn enabled(config: PomodoroConfig) -> Self {
        let source = Self::default();
        *source.config.borrow_mut() = Some(PomodoroConfig {
            is_enabled: true,
            ..config
        });
        source
    }
}

impl SnapshotSource for SharedSource {
    fn config(&self) -> Option<PomodoroConfig> {
        self.config.borrow().clone()
    }

    fn session(&self) -> SessionSnapshot {
        self.session.borrow().clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SinkCall {
    Sound,
    Notify(NotificationKind, u32),
    Toast(NotificationKind, u32),
    Dialog,
    Progress(f64),
}

#[derive(Default)]
struct RecordingSinks {
    calls: Vec<SinkCall>,
    progress_support: bool,
}

impl EffectSinks for RecordingSinks {
    fn supports_progress_indicator(&self) -> bool {
        self.progress_support
    }

    fn play_completion_sound(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push(SinkCall::Sound);
        Ok(())
    }

    fn notify_desktop(
        &mut self,
        kind: NotificationKind,
        cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push(SinkCall::Notify(kind, cycle_nr));
        Ok(())
    }

    fn show_toast(
        &mut self,
        kind: NotificationKind,
        cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push(SinkCall::Toast(kind, cycle_nr));
        Ok(())
    }

    fn present_break_dialog(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push(SinkCall::Dialog);
        Ok(())
    }

    fn set_progress_indicator(&mut self, ratio: f64) -> Result<(), Box<dyn std::error::Error>> {
        self.calls.push(SinkCall::Progress(ratio));
        Ok(())
    }
}

#[test]
fn full_work_cycle_with_auto_resume() {
    let source = SharedSource::enabled(PomodoroConfig::default());
    let mut dispatcher = Dispatcher::new(source.clone(), RecordingSinks::default());

    // A task starts being tracked: the pomodoro timer starts.
    let commands = dispatcher.dispatch(SessionEvent::TaskTrackingStarted {
        task_id: TaskId::from("write-report"),
    });
    assert_eq!(commands, vec![Command::StartTimer]);

    // The user stops tracking the task before the session ends: the
    // timer pauses.
    let commands = dispatcher.dispatch(SessionEvent::TaskTrackingStopped);
    assert_eq!(
        commands,
        vec![Command::PauseTimer {
            is_break_end_pause: false
        }]
    );

    // Work session finishes into a break (driver flips the flag before
    // the event is processed).
    source.session.borrow_mut().is_break = true;
    dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: false,
    });

    // Break finishes, back to work, no task tracked anymore: general
    // tracking resumes.
    source.session.borrow_mut().is_break = false;
    source.session.borrow_mut().current_cycle = 1;
    let commands = dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: false,
    });
    assert_eq!(commands, vec![Command::ToggleGeneralTracking]);
}

#[test]
fn break_with_stop_tracking_releases_task_without_pausing_timer() {
    let source = SharedSource::enabled(PomodoroConfig {
        is_stop_tracking_on_break: true,
        ..Default::default()
    });
    let mut dispatcher = Dispatcher::new(source.clone(), RecordingSinks::default());

    let commands = dispatcher.dispatch(SessionEvent::TaskTrackingStarted {
        task_id: TaskId::from("t"),
    });
    assert_eq!(commands, vec![Command::StartTimer]);

    source.session.borrow_mut().is_break = true;
    let commands = dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: false,
    });

    // The task is released, and the resulting tracking-stopped event
    // is swallowed by the on-break suppression: no PauseTimer.
    assert_eq!(commands, vec![Command::UnsetCurrentTask]);
    assert!(dispatcher.tracking().current_task_id().is_none());
}

#[test]
fn finish_into_break_full_effect_set() {
    let source = SharedSource::enabled(PomodoroConfig::default());
    source.session.borrow_mut().is_break = true;
    source.session.borrow_mut().current_cycle = 3;
    let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());

    dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: true,
    });

    // Default config plays the sound on the work-to-break boundary;
    // dialog and break notification fire; no toast while on break.
    let calls = &dispatcher.sinks().calls;
    assert!(calls.contains(&SinkCall::Sound));
    assert!(calls.contains(&SinkCall::Dialog));
    assert!(calls.contains(&SinkCall::Notify(NotificationKind::BreakStart, 4)));
    assert!(!calls
        .iter()
        .any(|c| matches!(c, SinkCall::Toast(_, _))));
}

#[test]
fn finish_into_work_notifies_and_toasts_with_next_cycle() {
    let source = SharedSource::enabled(PomodoroConfig::default());
    source.session.borrow_mut().current_cycle = 1;
    let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());

    dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: true,
    });

    let calls = &dispatcher.sinks().calls;
    assert!(calls.contains(&SinkCall::Notify(NotificationKind::SessionStart, 2)));
    assert!(calls.contains(&SinkCall::Toast(NotificationKind::SessionStart, 2)));
}

#[test]
fn disabled_feature_still_releases_task_on_stop() {
    // Feature being disabled is exactly when SessionStopped arrives.
    let source = SharedSource::default();
    *source.config.borrow_mut() = Some(PomodoroConfig::default());
    let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());

    let commands = dispatcher.dispatch(SessionEvent::SessionStopped);
    assert_eq!(commands, vec![Command::UnsetCurrentTask]);
}

#[test]
fn disabled_feature_ignores_tracking_changes() {
    let source = SharedSource::default();
    let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());

    let commands = dispatcher.dispatch(SessionEvent::TaskTrackingStarted {
        task_id: TaskId::from("t"),
    });
    assert!(commands.is_empty());
    assert!(dispatcher.sinks().calls.is_empty());
}

#[test]
fn notifications_survive_disabled_feature() {
    // The announcement rules carry no enablement guard.
    let source = SharedSource::default();
    let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());

    dispatcher.dispatch(SessionEvent::SessionFinished {
        is_dont_resume: true,
    });
    assert!(dispatcher
        .sinks()
        .calls
        .contains(&SinkCall::Notify(NotificationKind::SessionStart, 1)));
}

#[test]
fn progress_stream_forwards_while_enabled_and_supported() {
    let source = SharedSource::enabled(PomodoroConfig::default());
    let mut dispatcher = Dispatcher::new(
        source.clone(),
        RecordingSinks {
            progress_support: true,
            ..Default::default()
        },
    );

    dispatcher.progress_update(0.25);
    dispatcher.progress_update(0.5);
    *source.config.borrow_mut() = None;
    dispatcher.progress_update(0.75);

    assert_eq!(
        dispatcher.sinks().calls,
        vec![SinkCall::Progress(0.25), SinkCall::Progress(0.5)]
    );
}

mod determinism {
    use super::*;
    use proptest::prelude::*;

    fn arb_event() -> impl Strategy<Value = SessionEvent> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(|id| SessionEvent::TaskTrackingStarted {
                task_id: TaskId::from(id),
            }),
            Just(SessionEvent::TaskTrackingStopped),
            any::<bool>().prop_map(|b| SessionEvent::SessionFinished { is_dont_resume: b }),
            any::<bool>().prop_map(|b| SessionEvent::SessionPaused {
                is_break_end_pause: b,
            }),
            Just(SessionEvent::SessionStopped),
        ]
    }

    fn arb_config() -> impl Strategy<Value = PomodoroConfig> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(en, stop, snd, snd_after, manual)| PomodoroConfig {
                is_enabled: en,
                is_stop_tracking_on_break: stop,
                is_play_sound: snd,
                is_play_sound_after_break: snd_after,
                is_manual_continue: manual,
            },
        )
    }

    fn run_stream(
        config: &PomodoroConfig,
        session: &SessionSnapshot,
        events: &[SessionEvent],
    ) -> Vec<Command> {
        let source = SharedSource::default();
        *source.config.borrow_mut() = Some(config.clone());
        *source.session.borrow_mut() = session.clone();
        let mut dispatcher = Dispatcher::new(source, RecordingSinks::default());
        events
            .iter()
            .flat_map(|e| dispatcher.dispatch(e.clone()))
            .collect()
    }

    proptest! {
        /// Replaying an identical event sequence against identical
        /// initial snapshots yields an identical command sequence.
        #[test]
        fn replay_is_deterministic(
            config in arb_config(),
            is_break in any::<bool>(),
            is_manual_pause in any::<bool>(),
            cycle in 0u32..100,
            events in proptest::collection::vec(arb_event(), 0..20),
        ) {
            let session = SessionSnapshot {
                is_break,
                is_manual_pause,
                current_cycle: cycle,
                progress: 0.0,
            };
            let first = run_stream(&config, &session, &events);
            let second = run_stream(&config, &session, &events);
            prop_assert_eq!(first, second);
        }

        /// A disabled feature never emits anything except the
        /// unconditional unset on an explicit stop.
        #[test]
        fn disabled_emits_only_stop_unset(
            events in proptest::collection::vec(arb_event(), 0..20),
        ) {
            let config = PomodoroConfig::default(); // is_enabled: false
            let commands = run_stream(&config, &SessionSnapshot::default(), &events);
            prop_assert!(commands.iter().all(|c| *c == Command::UnsetCurrentTask));
        }
    }
}
