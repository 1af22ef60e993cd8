pub mod kv;
pub mod migrations;

pub use kv::{KvStore, MemoryStore, SqliteStore, StorageError, StorageResult};
