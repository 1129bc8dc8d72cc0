//! Application configuration management
//!
//! Handles loading and saving application settings including:
//! - Spin animation duration
//! - Reveal-to-quiz switch delay
//! - An optional default question file

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long one spin animation runs, in milliseconds
    #[serde(default = "default_spin_duration_ms")]
    pub spin_duration_ms: u64,

    /// Pause between the wheel reveal and the quiz view, in milliseconds
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Question file to load instead of the bundled set
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_spin_duration_ms() -> u64 {
    4000
}

fn default_reveal_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spin_duration_ms: default_spin_duration_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            data_file: None,
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "spinquiz", "spinquiz")
            .ok_or_else(|| QuizError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.spin_duration_ms, 4000);
        assert_eq!(config.reveal_delay_ms, 1000);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("spin_duration_ms = 2000").unwrap();
        assert_eq!(config.spin_duration_ms, 2000);
        assert_eq!(config.reveal_delay_ms, 1000);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            reveal_delay_ms: 0,
            data_file: Some(PathBuf::from("/tmp/questions.json")),
            ..Config::default()
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.reveal_delay_ms, 0);
        assert_eq!(parsed.data_file, Some(PathBuf::from("/tmp/questions.json")));
    }
}
