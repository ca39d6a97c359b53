//! Configuration management for habit-diary.
//!
//! This module handles loading and saving configuration from `~/.habit-diary/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    ColorSetting, Config, GeneralConfig, ProgramConfig, StorageConfig, MAX_DURATION_DAYS,
};
