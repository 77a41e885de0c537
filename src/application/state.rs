// src/application/state.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::infrastructure::Storage;
use crate::repositories::{
    StorageCatalogRepository, StoragePreferencesRepository, StorageSessionRepository,
};
use crate::services::{CatalogStore, PreferencesService, SessionService};

/// Application state shared by every command.
///
/// The catalog store sits behind a single mutex, so concurrent callers apply
/// mutations one at a time and storage always holds a fully applied change.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<Mutex<CatalogStore>>,
    pub preferences: Arc<PreferencesService>,
    pub session: Arc<SessionService>,
}

impl AppState {
    /// Wire repositories and services over one storage backend
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let catalog_repo = Arc::new(StorageCatalogRepository::new(storage.clone()));
        let preferences_repo = Arc::new(StoragePreferencesRepository::new(storage.clone()));
        let session_repo = Arc::new(StorageSessionRepository::new(storage));

        let catalog = CatalogStore::open(catalog_repo, event_bus.clone());
        let preferences = PreferencesService::new(preferences_repo, event_bus.clone());
        let session = SessionService::new(session_repo);

        Self {
            event_bus,
            catalog: Arc::new(Mutex::new(catalog)),
            preferences: Arc::new(preferences),
            session: Arc::new(session),
        }
    }

    /// Exclusive access to the catalog store
    pub fn catalog(&self) -> AppResult<MutexGuard<'_, CatalogStore>> {
        self.catalog
            .lock()
            .map_err(|_| AppError::Other("Catalog store lock poisoned".to_string()))
    }
}
