// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - One storage key per repository concern

pub mod catalog_repository;
pub mod preferences_repository;
pub mod session_repository;

pub use catalog_repository::{CatalogRepository, StorageCatalogRepository, CATALOG_KEY};
pub use preferences_repository::{PreferencesRepository, StoragePreferencesRepository, THEME_KEY};
pub use session_repository::{SessionRepository, StorageSessionRepository, USER_KEY};
