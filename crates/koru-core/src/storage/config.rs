//! TOML-based application configuration.
//!
//! Stores tunable behavior:
//! - Daily habit targets and the daily exercise goal
//! - Check-in cooldown window
//! - Streak lookback bound
//!
//! Configuration is stored at `~/.config/koru/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::habits::HabitTargets;

/// Habit target configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitsConfig {
    #[serde(default = "default_water_target")]
    pub water_target: f64,
    #[serde(default = "default_exercise_target")]
    pub exercise_target: f64,
    #[serde(default = "default_sleep_target")]
    pub sleep_target: f64,
    #[serde(default = "default_exercise_goal")]
    pub exercise_goal: u32,
}

/// Check-in gating configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckinConfig {
    #[serde(default = "default_cooldown_minutes")]
    pub cooldown_minutes: u32,
}

/// Mood tracking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodConfig {
    #[serde(default = "default_streak_lookback")]
    pub streak_lookback_days: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/koru/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub habits: HabitsConfig,
    #[serde(default)]
    pub checkin: CheckinConfig,
    #[serde(default)]
    pub mood: MoodConfig,
}

// Default functions
fn default_water_target() -> f64 {
    8.0
}
fn default_exercise_target() -> f64 {
    30.0
}
fn default_sleep_target() -> f64 {
    8.0
}
fn default_exercise_goal() -> u32 {
    3
}
fn default_cooldown_minutes() -> u32 {
    30
}
fn default_streak_lookback() -> u32 {
    30
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            water_target: default_water_target(),
            exercise_target: default_exercise_target(),
            sleep_target: default_sleep_target(),
            exercise_goal: default_exercise_goal(),
        }
    }
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            cooldown_minutes: default_cooldown_minutes(),
        }
    }
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            streak_lookback_days: default_streak_lookback(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/koru"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default (writing it back so the file
    /// exists for editing).
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// holds invalid values, or the default cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, &path),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from an explicit path without creating a missing file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// Convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.checkin.cooldown_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "checkin.cooldown_minutes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.mood.streak_lookback_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "mood.streak_lookback_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Habit targets in the form the tracker consumes.
    pub fn habit_targets(&self) -> HabitTargets {
        HabitTargets {
            water: self.habits.water_target,
            exercise: self.habits.exercise_target,
            sleep: self.habits.sleep_target,
        }
    }

    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.checkin.cooldown_minutes as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.habits.water_target, 8.0);
        assert_eq!(parsed.checkin.cooldown_minutes, 30);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[habits]\nwater_target = 10.0\n").unwrap();
        assert_eq!(cfg.habits.water_target, 10.0);
        assert_eq!(cfg.habits.exercise_target, 30.0);
        assert_eq!(cfg.mood.streak_lookback_days, 30);
    }

    #[test]
    fn load_from_rejects_zero_cooldown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[checkin]\ncooldown_minutes = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn save_and_reload_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.habits.exercise_goal = 5;
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }
}
