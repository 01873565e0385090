use clap::Subcommand;
use focusloop_core::PomodoroConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "is_enabled", "is_stop_tracking_on_break")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value (true or false)
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = PomodoroConfig::load();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = PomodoroConfig::load();
            config.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = PomodoroConfig::load();
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = PomodoroConfig::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
