//! TOML-based application configuration.
//!
//! Stores user preferences (notifications, voice narration, focus lock,
//! haptics, sound effects, sudden quests) plus the calibration record
//! consumed by the schedule generator.
//!
//! Configuration is stored at `~/.config/ascend/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::schedule::CalibrationData;

/// App settings toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub voice_enabled: bool,
    #[serde(default)]
    pub focus_lock: bool,
    #[serde(default = "default_true")]
    pub haptics: bool,
    #[serde(default = "default_true")]
    pub sound_effects: bool,
    #[serde(default = "default_true")]
    pub sudden_quests: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            notifications: true,
            voice_enabled: true,
            focus_lock: false,
            haptics: true,
            sound_effects: true,
            sudden_quests: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ascend/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Calibration record; None until the user has calibrated.
    #[serde(default)]
    pub calibration: Option<CalibrationData>,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Path to the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/ascend"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load configuration, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Persist configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Dotted-key getter for the CLI (`settings.voice_enabled`, ...).
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "settings.notifications" => self.settings.notifications.to_string(),
            "settings.voice_enabled" => self.settings.voice_enabled.to_string(),
            "settings.focus_lock" => self.settings.focus_lock.to_string(),
            "settings.haptics" => self.settings.haptics.to_string(),
            "settings.sound_effects" => self.settings.sound_effects.to_string(),
            "settings.sudden_quests" => self.settings.sudden_quests.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Dotted-key setter for the CLI.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parsed: bool = value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true/false, got '{value}'"),
        })?;
        match key {
            "settings.notifications" => self.settings.notifications = parsed,
            "settings.voice_enabled" => self.settings.voice_enabled = parsed,
            "settings.focus_lock" => self.settings.focus_lock = parsed,
            "settings.haptics" => self.settings.haptics = parsed,
            "settings.sound_effects" => self.settings.sound_effects = parsed,
            "settings.sudden_quests" => self.settings.sudden_quests = parsed,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All dotted keys with their current values, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("settings.notifications", self.settings.notifications.to_string()),
            ("settings.voice_enabled", self.settings.voice_enabled.to_string()),
            ("settings.focus_lock", self.settings.focus_lock.to_string()),
            ("settings.haptics", self.settings.haptics.to_string()),
            ("settings.sound_effects", self.settings.sound_effects.to_string()),
            ("settings.sudden_quests", self.settings.sudden_quests.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_settings() {
        let config = Config::default();
        assert!(config.settings.notifications);
        assert!(config.settings.voice_enabled);
        assert!(!config.settings.focus_lock);
        assert!(config.calibration.is_none());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.settings.focus_lock = true;
        config.calibration = Some(CalibrationData::default());

        let raw = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert!(back.settings.focus_lock);
        assert_eq!(back.calibration.unwrap().work_hours, "9-17");
    }

    #[test]
    fn dotted_get_set() {
        let mut config = Config::default();
        config.set("settings.voice_enabled", "false").unwrap();
        assert_eq!(config.get("settings.voice_enabled").unwrap(), "false");
        assert!(config.get("settings.volume").is_err());
        assert!(config.set("settings.haptics", "loud").is_err());
    }
}
