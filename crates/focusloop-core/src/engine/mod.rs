//! Reaction engine.
//!
//! A pure function of (event, snapshot context) -> effect descriptors.
//! The engine holds no state of its own; everything it needs is read
//! fresh from the context built for the current event tick, so
//! replaying the same events against the same snapshots yields the
//! same effects.

pub mod context;
pub mod effect;
pub mod rules;

pub use context::{EvalContext, SessionSnapshot, SnapshotSource};
pub use effect::{Effect, NotificationKind};
pub use rules::{Rule, RULES};

use crate::events::SessionEvent;

/// Evaluates the reaction table against incoming events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionEngine;

impl ReactionEngine {
    pub fn new() -> Self {
        Self
    }

    /// The ordered rule table.
    pub fn rules(&self) -> &'static [Rule] {
        RULES
    }

    /// Run every matching rule for one event. Rules behind the
    /// enablement guard are skipped as a whole when the feature is
    /// disabled (or config is absent); the rest run unconditionally.
    pub fn evaluate(&self, event: &SessionEvent, ctx: &EvalContext) -> Vec<Effect> {
        let enabled = ctx.is_enabled();
        let mut effects = Vec::new();
        for rule in RULES {
            if rule.requires_enabled && !enabled {
                continue;
            }
            effects.extend((rule.apply)(event, ctx));
        }
        effects
    }

    /// Progress updates are a continuous signal, not a session event:
    /// forward the ratio while the feature is enabled. Whether the
    /// environment has an OS progress surface at all is the
    /// dispatcher's concern.
    pub fn on_progress(&self, ratio: f64, ctx: &EvalContext) -> Option<Effect> {
        if ctx.is_enabled() {
            Some(Effect::SetProgressIndicator {
                ratio: ratio.clamp(0.0, 1.0),
            })
        } else {
            None
        }
    }
}
