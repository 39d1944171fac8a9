// Database service module
// SQLite connection and schema for the local event store

use anyhow::{Context, Result};
use rusqlite::Connection;

mod schema;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    ///
    /// # Examples
    /// ```
    /// use cloud_calendar::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open database at {}", path))?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        Ok(Self { conn })
    }

    /// Initialize the database schema
    /// Creates all required tables if they don't exist
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(&self.conn)
    }

    /// Get a reference to the database connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_new_database_in_memory() {
        let result = Database::new(":memory:");
        assert!(result.is_ok(), "Should create in-memory database");
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_str().unwrap();

        let result = Database::new(db_path_str);
        assert!(result.is_ok(), "Should create file-based database");
        assert!(Path::new(db_path_str).exists(), "Database file should exist");
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::new(":memory:").unwrap();
        assert!(db.initialize_schema().is_ok(), "Schema initialization should succeed");
        assert!(db.initialize_schema().is_ok(), "Second initialization should be a no-op");
    }

    #[test]
    fn test_events_table_exists() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let result: Result<i64, rusqlite::Error> = db.connection().query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='events'",
            [],
            |row| row.get(0),
        );

        assert_eq!(result.unwrap(), 1, "Events table should exist");
    }

    #[test]
    fn test_events_table_columns() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();

        let mut stmt = db
            .connection()
            .prepare("SELECT name FROM pragma_table_info('events')")
            .unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        for expected in [
            "id",
            "user_id",
            "title",
            "description",
            "start_time",
            "end_time",
            "color",
            "all_day",
            "location",
        ] {
            assert!(
                columns.iter().any(|c| c == expected),
                "missing column {}",
                expected
            );
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new(":memory:").unwrap();

        let result: Result<i64, rusqlite::Error> =
            db.connection()
                .query_row("PRAGMA foreign_keys", [], |row| row.get(0));

        assert_eq!(result.unwrap(), 1, "Foreign keys should be enabled");
    }
}
