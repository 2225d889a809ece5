//! Configuration settings for focusguard.
//!
//! Settings are loaded from `~/.focusguard/config.yaml`. Every key has a
//! default, so a missing file means default behavior. Durations are kept as
//! the same human-readable strings the command line accepts ("45m", "1h").

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::duration::parse_duration;
use crate::error::FocusGuardError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Session timer settings.
    pub timer: TimerConfig,
}

/// Session timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval before the break reminder.
    #[serde(default = "default_focus")]
    pub focus: String,
    /// Grace interval between the reminder and the screen lock.
    #[serde(default = "default_grace")]
    pub grace: String,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Enable the screen lock at grace expiry.
    #[serde(default = "default_true")]
    pub lock: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus: default_focus(),
            grace: default_grace(),
            notifications: true,
            lock: true,
        }
    }
}

fn default_focus() -> String {
    "45m".to_string()
}

fn default_grace() -> String {
    "15m".to_string()
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the config file, or defaults if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, FocusGuardError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&paths.config_file)?;
        Ok(serde_yaml::from_str(&data)?)
    }

    /// Write this configuration to the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, paths: &Paths) -> Result<(), FocusGuardError> {
        paths.ensure_dirs()?;
        let data = serde_yaml::to_string(self)?;
        std::fs::write(&paths.config_file, data)?;
        Ok(())
    }

    /// Parse the focus duration string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed or non-positive values.
    pub fn focus_duration(&self) -> Result<chrono::Duration, FocusGuardError> {
        parse_duration_setting(&self.timer.focus, "focus")
    }

    /// Parse the grace duration string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed or non-positive values.
    pub fn grace_duration(&self) -> Result<chrono::Duration, FocusGuardError> {
        parse_duration_setting(&self.timer.grace, "grace")
    }
}

/// Parse a duration setting, failing with a pointer at the offending key.
pub fn parse_duration_setting(
    value: &str,
    which: &str,
) -> Result<chrono::Duration, FocusGuardError> {
    parse_duration(value).ok_or_else(|| {
        FocusGuardError::Config(format!(
            "invalid {which} duration '{value}' (use formats like 45m, 1h30m, 90s)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timer.focus, "45m");
        assert_eq!(config.timer.grace, "15m");
        assert!(config.timer.notifications);
        assert!(config.timer.lock);
        assert_eq!(
            config.focus_duration().unwrap(),
            chrono::Duration::minutes(45)
        );
        assert_eq!(
            config.grace_duration().unwrap(),
            chrono::Duration::minutes(15)
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.timer.focus, "45m");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let mut config = Config::default();
        config.timer.focus = "25m".to_string();
        config.timer.lock = false;
        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.timer.focus, "25m");
        assert!(!loaded.timer.lock);
        assert_eq!(loaded.timer.grace, "15m");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("timer:\n  focus: 1h\n").unwrap();
        assert_eq!(config.timer.focus, "1h");
        assert_eq!(config.timer.grace, "15m");
        assert!(config.timer.notifications);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let mut config = Config::default();
        config.timer.focus = "soon".to_string();
        assert!(config.focus_duration().is_err());

        config.timer.focus = "0m".to_string();
        assert!(config.focus_duration().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        std::fs::write(&paths.config_file, "timer: [not, a, map]").unwrap();

        assert!(Config::load(&paths).is_err());
    }
}
