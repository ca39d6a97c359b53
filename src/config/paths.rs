//! Where habit-diary keeps its files.
//!
//! Everything lives under one data root, `~/.habit-diary/`:
//! - `config.yaml` - Program and display configuration
//! - `diary.db` - `SQLite` key-value store holding the diary document
//! - `exports/` - Export destination when no `--file` is given
//!
//! Exports are one-way snapshots. Nothing in `exports/` is read back, so the
//! directory can be emptied at any time without touching the diary.

use std::path::{Path, PathBuf};

use crate::error::DiaryError;
use crate::features::export::DEFAULT_EXPORT_FILE;

/// Name of the data root inside the home directory.
const ROOT_DIR: &str = ".habit-diary";

/// Resolved locations of the config file, database and exports.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Data root: `~/.habit-diary/`
    pub root: PathBuf,
    /// `~/.habit-diary/config.yaml`
    pub config_file: PathBuf,
    /// `~/.habit-diary/diary.db`
    pub database: PathBuf,
    /// `~/.habit-diary/exports/`
    pub exports: PathBuf,
}

impl Paths {
    /// Resolve the data root from `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Config` if `HOME` is unset.
    pub fn new() -> Result<Self, DiaryError> {
        let home = std::env::var_os("HOME")
            .ok_or_else(|| DiaryError::Config("HOME is not set".to_string()))?;
        Ok(Self::with_root(Path::new(&home).join(ROOT_DIR)))
    }

    /// Use `root` as the data root.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("diary.db"),
            exports: root.join("exports"),
            root,
        }
    }

    /// Where `export` writes when no `--file` is given.
    #[must_use]
    pub fn default_export_file(&self) -> PathBuf {
        self.exports.join(DEFAULT_EXPORT_FILE)
    }

    /// Create the data root and the exports directory.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Config` naming the directory that could not be
    /// created.
    pub fn ensure_dirs(&self) -> Result<(), DiaryError> {
        [&self.root, &self.exports].into_iter().try_for_each(|dir| {
            std::fs::create_dir_all(dir).map_err(|e| {
                DiaryError::Config(format!("Failed to create directory {}: {e}", dir.display()))
            })
        })
    }
}
