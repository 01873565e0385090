//! # Focusloop Core Library
//!
//! This library provides the pomodoro coordination logic for Focusloop.
//! The timer itself, the task store and every side-effect sink live
//! outside this crate; what lives here is the reaction engine that sits
//! between them -- an explicit rule table that turns a single ordered
//! stream of session/tracking events into derived commands and
//! side-effect descriptors.
//!
//! ## Architecture
//!
//! - **Reaction Engine**: A pure rule table. Each rule is an
//!   independent reaction evaluated against an incoming event plus a
//!   point-in-time snapshot of config/session/tracking state
//! - **Dispatcher**: FIFO event plumbing -- emitted commands re-enter
//!   the same ordered stream, effects are applied to pluggable sinks
//! - **Storage**: TOML-based pomodoro configuration
//!
//! ## Key Components
//!
//! - [`ReactionEngine`]: The rule table
//! - [`Dispatcher`]: Sequential event loop with command feedback
//! - [`PomodoroConfig`]: Feature configuration
//! - [`EffectSinks`]: Trait for sound/notification/dialog/progress sinks

pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod events;
pub mod sinks;
pub mod storage;
pub mod tracking;

pub use dispatcher::Dispatcher;
pub use engine::{Effect, EvalContext, NotificationKind, ReactionEngine, SessionSnapshot, SnapshotSource};
pub use error::ConfigError;
pub use events::{Command, SessionEvent};
pub use sinks::{EffectSinks, NullSinks};
pub use storage::PomodoroConfig;
pub use tracking::{TaskId, TaskTrackingLink};
