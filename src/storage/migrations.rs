//! Schema migrations for the diary database.
//!
//! `PRAGMA user_version` records how many entries of [`MIGRATIONS`] have
//! been applied. Opening a database applies the rest in order.

use rusqlite::Connection;
use tracing::debug;

use crate::error::DiaryError;

/// Schema steps, oldest first. Entry `n` upgrades version `n` to `n + 1`.
const MIGRATIONS: &[&str] = &[
    // v1: one row per stored document
    r"
    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    ",
];

/// Schema version a fully migrated database reports.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const LATEST_VERSION: i32 = MIGRATIONS.len() as i32;

/// Read the schema version. A fresh database reports 0.
///
/// # Errors
///
/// Returns `DiaryError::Database` if the pragma cannot be read.
pub fn schema_version(conn: &Connection) -> Result<i32, DiaryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| DiaryError::Database(format!("Failed to read schema version: {e}")))
}

/// Bring the schema up to [`LATEST_VERSION`].
///
/// # Errors
///
/// Returns `DiaryError::Database` if a step fails or the database is newer
/// than this build understands.
pub fn run(conn: &Connection) -> Result<(), DiaryError> {
    let current = schema_version(conn)?;
    if current > LATEST_VERSION {
        return Err(DiaryError::Database(format!(
            "database schema v{current} is newer than supported v{LATEST_VERSION}"
        )));
    }

    let pending = MIGRATIONS.iter().zip(1..).skip(usize::try_from(current).unwrap_or(0));
    for (sql, version) in pending {
        debug!(version, "applying schema migration");
        conn.execute_batch(&format!("{sql}\nPRAGMA user_version = {version};"))
            .map_err(|e| DiaryError::Database(format!("Migration to v{version} failed: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_is_version_zero() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_run_creates_kv_table() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(schema_version(&conn).unwrap(), LATEST_VERSION);
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('habit_diary', '{}', '2024-01-01T10:00:00Z')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", LATEST_VERSION + 1))
            .unwrap();

        assert!(matches!(run(&conn), Err(DiaryError::Database(_))));
    }
}
