//! TOML-based pomodoro configuration.
//!
//! Stores the feature flags the reaction engine reads on every event:
//! - Whether the pomodoro feature is enabled at all
//! - Whether time tracking is suspended during breaks
//! - Sound preferences for session/break boundaries
//! - Whether breaks require manual continuation
//!
//! Configuration is stored at `~/.config/focusloop/config.toml`. The
//! engine never caches a config across events; it reads a fresh
//! snapshot per event tick, and a missing config reads as disabled.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Pomodoro feature configuration.
///
/// Serialized to/from TOML at `~/.config/focusloop/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Master switch for the pomodoro feature.
    #[serde(default)]
    pub is_enabled: bool,
    /// Unset the tracked task while a break is running.
    #[serde(default)]
    pub is_stop_tracking_on_break: bool,
    /// Play the completion sound when a work session finishes.
    #[serde(default = "default_true")]
    pub is_play_sound: bool,
    /// Play the completion sound when a break ends.
    #[serde(default)]
    pub is_play_sound_after_break: bool,
    /// Breaks wait for explicit user action instead of auto-continuing.
    #[serde(default)]
    pub is_manual_continue: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            is_enabled: false,
            is_stop_tracking_on_break: false,
            is_play_sound: true,
            is_play_sound_after_break: false,
            is_manual_continue: false,
        }
    }
}

impl PomodoroConfig {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::path()
            .ok()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Load from an explicit path. Used by tests and the CLI.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a single flag by key. Returns `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "is_enabled" => Some(self.is_enabled),
            "is_stop_tracking_on_break" => Some(self.is_stop_tracking_on_break),
            "is_play_sound" => Some(self.is_play_sound),
            "is_play_sound_after_break" => Some(self.is_play_sound_after_break),
            "is_manual_continue" => Some(self.is_manual_continue),
            _ => None,
        }
    }

    /// Set a single flag by key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: bool = value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true or false, got '{value}'"),
        })?;
        match key {
            "is_enabled" => self.is_enabled = parsed,
            "is_stop_tracking_on_break" => self.is_stop_tracking_on_break = parsed,
            "is_play_sound" => self.is_play_sound = parsed,
            "is_play_sound_after_break" => self.is_play_sound_after_break = parsed,
            "is_manual_continue" => self.is_manual_continue = parsed,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}
