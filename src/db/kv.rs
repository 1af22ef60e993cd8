use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String key/value medium the tracker persists into.
pub trait KvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

// ─── SQLite ──────────────────────────────────────────────────────────────────

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wraps a connection whose schema has already been migrated.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

// ─── In-memory ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn open(path: &std::path::Path) -> SqliteStore {
        let conn = Connection::open(path).unwrap();
        run_migrations(&conn).unwrap();
        SqliteStore::new(conn)
    }

    #[test]
    fn sqlite_upserts_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amal.db");

        let store = open(&path);
        assert_eq!(store.get("tracker-2026-03-01").unwrap(), None);
        store.set("tracker-2026-03-01", "[\"subuh\"]").unwrap();
        store.set("tracker-2026-03-01", "[\"subuh\",\"isya\"]").unwrap();
        drop(store);

        let store = open(&path);
        assert_eq!(
            store.get("tracker-2026-03-01").unwrap().as_deref(),
            Some("[\"subuh\",\"isya\"]")
        );
    }

    #[test]
    fn memory_store_reads_its_writes() {
        let store = MemoryStore::new();
        store.set("fasting-2026-03-01", "true").unwrap();
        assert_eq!(
            store.get("fasting-2026-03-01").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get("fasting-2026-03-02").unwrap(), None);
    }
}
