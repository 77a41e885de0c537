// src/services/catalog_store.rs
//
// Sole owner of the catalog collection.
//
// Every mutation is persisted before it becomes visible: the next collection
// is built aside, written through the repository, and only then swapped in.
// A failed write leaves both memory and storage on the previous state.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    seed_catalog, validate_catalog_entry, CatalogEntry, CatalogEntryPatch, NewCatalogEntry,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    CatalogEntryCreated, CatalogEntryDeleted, CatalogEntryUpdated, EventBus, FavoriteToggled,
};
use crate::repositories::CatalogRepository;

/// Immutable view of the collection at one point in time
pub type CatalogSnapshot = Arc<Vec<CatalogEntry>>;

pub struct CatalogStore {
    repo: Arc<dyn CatalogRepository>,
    event_bus: Arc<EventBus>,
    entries: CatalogSnapshot,
}

impl CatalogStore {
    /// Load the persisted collection, or start from the seed set.
    ///
    /// Never fails: a missing, unreadable or undecodable payload degrades to
    /// seed data. Later entries repeating an earlier id are dropped. Nothing
    /// is written until the first mutation.
    pub fn open(repo: Arc<dyn CatalogRepository>, event_bus: Arc<EventBus>) -> Self {
        let entries = match repo.load() {
            Ok(Some(entries)) => {
                log::debug!("Loaded {} catalog entries", entries.len());
                dedup_ids(entries)
            }
            Ok(None) => {
                log::info!("No persisted catalog found, starting from seed data");
                seed_catalog()
            }
            Err(e) => {
                log::warn!("Persisted catalog unusable, falling back to seed data: {}", e);
                seed_catalog()
            }
        };

        Self {
            repo,
            event_bus,
            entries: Arc::new(entries),
        }
    }

    /// Current collection; later mutations never affect a returned snapshot
    pub fn snapshot(&self) -> CatalogSnapshot {
        Arc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Add a new entry at the front of the collection
    pub fn create(&mut self, input: NewCatalogEntry) -> AppResult<CatalogEntry> {
        let mut entry = CatalogEntry::new(input);
        validate_catalog_entry(&entry)?;

        while self.get(&entry.id).is_some() {
            entry.id = Uuid::new_v4().to_string();
        }

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry.clone());
        next.extend(self.entries.iter().cloned());
        self.commit(next)?;

        log::info!("Created catalog entry {} ({})", entry.id, entry.title);
        self.event_bus
            .emit(CatalogEntryCreated::new(entry.id.clone(), entry.title.clone()));

        Ok(entry)
    }

    /// Merge `patch` onto the entry with `id`
    pub fn update(&mut self, id: &str, patch: CatalogEntryPatch) -> AppResult<CatalogEntry> {
        let idx = self.position(id)?;

        let mut entry = self.entries[idx].clone();
        entry.apply_patch(patch);
        validate_catalog_entry(&entry)?;

        let mut next = self.entries.as_ref().clone();
        next[idx] = entry.clone();
        self.commit(next)?;

        log::info!("Updated catalog entry {}", id);
        self.event_bus.emit(CatalogEntryUpdated::new(entry.id.clone()));

        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op and writes nothing.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let Ok(idx) = self.position(id) else {
            log::debug!("Delete of unknown catalog entry {} ignored", id);
            return Ok(false);
        };

        let mut next = self.entries.as_ref().clone();
        next.remove(idx);
        self.commit(next)?;

        log::info!("Deleted catalog entry {}", id);
        self.event_bus.emit(CatalogEntryDeleted::new(id.to_string()));

        Ok(true)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> AppResult<CatalogEntry> {
        let idx = self.position(id)?;

        let mut next = self.entries.as_ref().clone();
        next[idx].toggle_favorite();
        let entry = next[idx].clone();
        self.commit(next)?;

        log::info!("Catalog entry {} favorite = {}", id, entry.is_favorite);
        self.event_bus
            .emit(FavoriteToggled::new(entry.id.clone(), entry.is_favorite));

        Ok(entry)
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn commit(&mut self, next: Vec<CatalogEntry>) -> AppResult<()> {
        self.repo.save(&next)?;
        self.entries = Arc::new(next);
        Ok(())
    }
}

/// Keep the first entry for each id
fn dedup_ids(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::with_capacity(entries.len());

    entries
        .into_iter()
        .filter(|entry| {
            let first = seen.insert(entry.id.clone());
            if !first {
                log::warn!("Dropping persisted catalog entry with duplicate id {}", entry.id);
            }
            first
        })
        .collect()
}
