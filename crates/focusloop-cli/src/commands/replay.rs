//! Replay a recorded event stream through the reaction engine.
//!
//! Events are read as JSON lines (one `SessionEvent` per line) from a
//! file or stdin. Session state is fixed for the whole replay via
//! command-line flags; the stored config is used unless overridden.
//! Useful for auditing which rules fire for a given sequence.

use std::io::BufRead;

use clap::Args;
use focusloop_core::engine::{NotificationKind, SessionSnapshot, SnapshotSource};
use focusloop_core::{Dispatcher, EffectSinks, PomodoroConfig, SessionEvent};

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to a JSON-lines event file, or "-" for stdin
    pub input: String,
    /// Treat the session as currently on break
    #[arg(long = "break")]
    pub is_break: bool,
    /// Treat the session as manually paused
    #[arg(long)]
    pub manual_pause: bool,
    /// Completed cycle count
    #[arg(long, default_value_t = 0)]
    pub cycle: u32,
    /// Override the stored config: force the feature enabled
    #[arg(long)]
    pub enabled: bool,
}

struct FixedSource {
    config: Option<PomodoroConfig>,
    session: SessionSnapshot,
}

impl SnapshotSource for FixedSource {
    fn config(&self) -> Option<PomodoroConfig> {
        self.config.clone()
    }

    fn session(&self) -> SessionSnapshot {
        self.session.clone()
    }
}

/// Prints each side effect as it would be invoked.
struct ConsoleSinks;

impl EffectSinks for ConsoleSinks {
    fn play_completion_sound(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("effect: play completion sound");
        Ok(())
    }

    fn notify_desktop(
        &mut self,
        kind: NotificationKind,
        cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!("effect: desktop notification {} #{cycle_nr}", label(kind));
        Ok(())
    }

    fn show_toast(
        &mut self,
        kind: NotificationKind,
        cycle_nr: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!("effect: toast {} #{cycle_nr}", label(kind));
        Ok(())
    }

    fn present_break_dialog(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("effect: present break dialog");
        Ok(())
    }
}

fn label(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::BreakStart => "break-start",
        NotificationKind::SessionStart => "session-start",
    }
}

pub fn run(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = PomodoroConfig::load();
    if args.enabled {
        config.is_enabled = true;
    }
    let source = FixedSource {
        config: Some(config),
        session: SessionSnapshot {
            is_break: args.is_break,
            is_manual_pause: args.manual_pause,
            current_cycle: args.cycle,
            progress: 0.0,
        },
    };
    let mut dispatcher = Dispatcher::new(source, ConsoleSinks);

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        Box::new(std::io::BufReader::new(std::fs::File::open(&args.input)?))
    };

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: SessionEvent = serde_json::from_str(&line)?;
        println!("event: {}", serde_json::to_string(&event)?);
        for command in dispatcher.dispatch(event) {
            println!("command: {}", serde_json::to_string(&command)?);
        }
    }
    Ok(())
}
