// src/infrastructure/storage/sqlite.rs
//
// Key/value storage in the `kv_store` table.

use std::path::Path;
use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use super::Storage;
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    ConnectionPool,
};
use crate::error::AppResult;

pub struct SqliteStorage {
    pool: Arc<ConnectionPool>,
}

impl SqliteStorage {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Open (or create) the database in `data_dir` and bring its schema up to date
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        let db_path = get_database_path(data_dir)?;
        let pool = Arc::new(create_connection_pool(&db_path)?);

        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        Ok(Self::new(pool))
    }
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn write(&self, key: &str, value: &[u8]) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}
