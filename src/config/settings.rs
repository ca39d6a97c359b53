//! Configuration settings for habit-diary.
//!
//! Settings are loaded from `~/.habit-diary/config.yaml`.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::diary::{default_task_templates, TaskTemplate};
use crate::error::DiaryError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// The habit program: length, start date and daily tasks.
    pub program: ProgramConfig,
    /// Persistence settings.
    pub storage: StorageConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Program settings as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Length of the program in days.
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
    /// First day of the program. Today when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Daily task templates.
    #[serde(default = "default_task_templates")]
    pub tasks: Vec<TaskTemplate>,
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key under which the diary document is stored.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_duration_days() -> u32 {
    90
}

fn default_storage_key() -> String {
    "habit_diary".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            duration_days: default_duration_days(),
            start_date: None,
            tasks: default_task_templates(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

/// Longest program accepted, roughly a century of days.
pub const MAX_DURATION_DAYS: u32 = 36_500;

impl ProgramConfig {
    /// Check the program for values the diary cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error for a duration outside `1..=MAX_DURATION_DAYS`, an
    /// empty task list, or duplicate or blank task ids.
    pub fn validate(&self) -> Result<(), DiaryError> {
        if self.duration_days == 0 {
            return Err(DiaryError::Config(
                "program.duration_days must be at least 1".to_string(),
            ));
        }
        if self.duration_days > MAX_DURATION_DAYS {
            return Err(DiaryError::Config(format!(
                "program.duration_days must be at most {MAX_DURATION_DAYS}, got {}",
                self.duration_days
            )));
        }
        if self.tasks.is_empty() {
            return Err(DiaryError::Config(
                "program.tasks must contain at least one task".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.id.trim().is_empty() {
                return Err(DiaryError::Config("task ids must not be blank".to_string()));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(DiaryError::Config(format!("duplicate task id '{}'", task.id)));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, DiaryError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// describes an invalid program.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, DiaryError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DiaryError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            DiaryError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.program.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), DiaryError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| DiaryError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            DiaryError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
