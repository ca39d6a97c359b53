//! Error types for habit-diary.

use thiserror::Error;

/// Errors produced by the diary, its storage and the CLI.
#[derive(Error, Debug)]
pub enum DiaryError {
    /// Configuration file or directory problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The persistence backend failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A task id that is not part of the configured program.
    #[error("Unknown task '{0}'. Run 'habit-diary tasks' to list task ids")]
    UnknownTask(String),

    /// A day index that cannot be used.
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// Something the user asked for does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The user declined a confirmation prompt.
    #[error("Aborted: {0}")]
    Aborted(String),
}

impl DiaryError {
    /// Exit code for the binary.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Aborted(_) => 2,
            _ => 1,
        }
    }
}
