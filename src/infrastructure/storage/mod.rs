// src/infrastructure/storage/mod.rs
//
// Durable key/value storage
//
// The catalog, the theme and the session record are each stored as one opaque
// value under one key. Backends know nothing about what the bytes mean.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::AppResult;

/// Capability to read and write bytes by key
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`
    fn read(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the value under `key`
    fn write(&self, key: &str, value: &[u8]) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}
