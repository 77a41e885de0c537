// src/repositories/catalog_repository.rs
//
// Catalog persistence: the whole collection is one JSON array under one key.

use std::sync::Arc;

use crate::domain::CatalogEntry;
use crate::error::{AppError, AppResult};
use crate::infrastructure::Storage;

/// Storage key holding the catalog collection
pub const CATALOG_KEY: &str = "gamehub.catalog";

pub trait CatalogRepository: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet.
    /// An undecodable payload yields `AppError::PersistenceDecode`.
    fn load(&self) -> AppResult<Option<Vec<CatalogEntry>>>;

    /// Overwrite the persisted collection
    fn save(&self, entries: &[CatalogEntry]) -> AppResult<()>;
}

pub struct StorageCatalogRepository {
    storage: Arc<dyn Storage>,
}

impl StorageCatalogRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl CatalogRepository for StorageCatalogRepository {
    fn load(&self) -> AppResult<Option<Vec<CatalogEntry>>> {
        let Some(bytes) = self.storage.read(CATALOG_KEY)? else {
            return Ok(None);
        };

        let entries = serde_json::from_slice(&bytes).map_err(|source| {
            AppError::PersistenceDecode {
                key: CATALOG_KEY.to_string(),
                source,
            }
        })?;

        Ok(Some(entries))
    }

    fn save(&self, entries: &[CatalogEntry]) -> AppResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.storage.write(CATALOG_KEY, &bytes)
    }
}
