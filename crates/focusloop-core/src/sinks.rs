//! Side-effect sinks.
//!
//! Every sink call is fire-and-forget: the engine never consumes a
//! return value, and an environment without a capability simply keeps
//! the default no-op. A sink failure is logged by the dispatcher and
//! never blocks the remaining effects for the same event.

use crate::engine::NotificationKind;

/// Everything the dispatcher can invoke on behalf of the rules.
/// Implementations override what their environment supports.
pub trait EffectSinks {
    /// Whether the environment has an OS-level progress surface
    /// (taskbar/dock). Progress updates are dropped when it doesn't.
    fn supports_progress_indicator(&self) -> bool {
        false
    }

    /// Play the session-done sound.
    fn play_completion_sound(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// Show a desktop notification.
    fn notify_desktop(
        &mut self,
        _kind: NotificationKind,
        _cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// Show an in-app toast.
    fn show_toast(
        &mut self,
        _kind: NotificationKind,
        _cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// Open the break modal.
    fn present_break_dialog(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }

    /// Update the OS progress indicator.
    fn set_progress_indicator(&mut self, _ratio: f64) -> Result<(), Box<dyn std::error::Error>> {
        Ok(()) // default no-op
    }
}

/// Sink implementation for environments with no capabilities at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSinks;

impl EffectSinks for NullSinks {}
