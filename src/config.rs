// src/config.rs
//
// Runtime configuration: where data lives and which storage backend holds it.
// Resolution order: CLI flags, then environment, then defaults.

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;

use crate::error::{AppError, AppResult};
use crate::infrastructure::{FileStorage, MemoryStorage, SqliteStorage, Storage};

/// Overrides the data directory
pub const DATA_DIR_ENV: &str = "GAMEHUB_DATA_DIR";

/// Selects the storage backend (`sqlite`, `file` or `memory`)
pub const STORAGE_ENV: &str = "GAMEHUB_STORAGE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Single SQLite database file
    #[default]
    Sqlite,
    /// One file per storage key
    File,
    /// Nothing survives the process
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::Other(format!("Unknown storage backend: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
}

/// `{APP_DATA}/gamehub`
pub fn default_data_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;
    Ok(app_data_dir.join("gamehub"))
}

impl AppConfig {
    /// Read `GAMEHUB_DATA_DIR` / `GAMEHUB_STORAGE`, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(STORAGE_ENV).ok(),
        )
    }

    pub fn from_vars(data_dir: Option<String>, storage: Option<String>) -> AppResult<Self> {
        let data_dir = match data_dir.filter(|d| !d.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let backend = match storage.filter(|s| !s.trim().is_empty()) {
            Some(s) => s.parse()?,
            None => StorageBackend::default(),
        };

        Ok(Self { data_dir, backend })
    }

    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        backend: Option<StorageBackend>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(b) = backend {
            self.backend = b;
        }
        self
    }

    /// Open the configured backend
    pub fn open_storage(&self) -> AppResult<Arc<dyn Storage>> {
        log::debug!(
            "Opening {:?} storage in {}",
            self.backend,
            self.data_dir.display()
        );

        let storage: Arc<dyn Storage> = match self.backend {
            StorageBackend::Sqlite => Arc::new(SqliteStorage::open(&self.data_dir)?),
            StorageBackend::File => Arc::new(FileStorage::new(&self.data_dir)?),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        };

        Ok(storage)
    }
}
