//! SQLite-backed session storage

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

use crate::application::errors::StorageError;
use crate::domain::traits::SessionStore;

/// Session values persisted in a single key/value table
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS session (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Serialization("session connection poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM session WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO session (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM session WHERE key = ?1", [key])?;
        Ok(())
    }
}
