//! `SQLite` database connection and key-value operations.
//!
//! The diary document is kept as JSON text in a single `kv` row, keyed by
//! the configured storage key. The file lives at `~/.habit-diary/diary.db`.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::core::KeyValueStore;
use crate::error::DiaryError;

use super::migrations;

/// `SQLite`-backed [`KeyValueStore`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file at `path` and migrate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a migration fails.
    pub fn open_at(path: &Path) -> Result<Self, DiaryError> {
        let conn = Connection::open(path).map_err(|e| {
            DiaryError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "opened diary database");
        Self::migrated(conn)
    }

    /// Open a throwaway in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, DiaryError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DiaryError::Database(format!("Failed to open in-memory database: {e}")))?;
        Self::migrated(conn)
    }

    fn migrated(conn: Connection) -> Result<Self, DiaryError> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Schema version recorded in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, DiaryError> {
        migrations::schema_version(&self.conn)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, DiaryError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .map_err(|e| DiaryError::Database(format!("Failed to read '{key}': {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DiaryError> {
        self.conn
            .execute(
                r"INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                 updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| DiaryError::Database(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }
}
