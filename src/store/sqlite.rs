//! SQLite-backed key-value store.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::KeyValueStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Wrap an already migrated database.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database at `path` and make sure the schema is in place.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;

        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })?;

        Ok(())
    }
}
