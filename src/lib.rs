// src/lib.rs
// GameHub - Local-first game catalog
//
// Architecture:
// - Domain-centric: catalog rules live in `domain`
// - One owner: `CatalogStore` is the only code that mutates the collection
// - Pure listing: `CatalogQuery` derives results and facets from a snapshot
// - Injected storage: every persisted value goes through the `Storage` capability
// - Application layer: DTOs and commands for the UI boundary (the CLI)

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

pub mod application;
pub mod cli;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    seed_catalog, validate_catalog_entry, validate_filter_params, CatalogEntry,
    CatalogEntryPatch, DomainError, FilterParams, GenreFilter, NewCatalogEntry, Theme,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    CatalogEntryCreated, CatalogEntryDeleted, CatalogEntryUpdated, DomainEvent, EventBus,
    EventLogEntry, FavoriteToggled, ThemeChanged,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use infrastructure::{FileStorage, MemoryStorage, SqliteStorage, Storage};

pub use repositories::{
    CatalogRepository, PreferencesRepository, SessionRepository, StorageCatalogRepository,
    StoragePreferencesRepository, StorageSessionRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CatalogQuery, CatalogSnapshot, CatalogStore, CatalogView, PreferencesService, SessionService,
};

pub use config::{AppConfig, StorageBackend};

pub use application::AppState;
