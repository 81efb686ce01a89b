//! SQLite-backed key-value store.
//!
//! Provides the [`SqliteStore`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open. Values live in a single
//! `kv` table; each `put` replaces the previous value for the key.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::migrations;
use super::KvStore;
use crate::types::errors::StoreError;

/// Key-value store persisted in a SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at the given path and runs migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Opens an in-memory database and runs migrations.
    ///
    /// Useful for testing — the data is discarded when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        migrations::run_all(&self.conn).map_err(|e| StoreError::Backend(e.to_string()))
    }

    /// Schema version the database is currently at.
    pub fn schema_version(&self) -> Result<i32, StoreError> {
        Ok(migrations::get_schema_version(&self.conn))
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }
}
