// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_query;
pub mod catalog_store;
pub mod preferences_service;
pub mod session_service;

#[cfg(test)]
mod catalog_store_tests;

pub use catalog_query::{CatalogQuery, CatalogView};

pub use catalog_store::{CatalogSnapshot, CatalogStore};

pub use preferences_service::PreferencesService;

pub use session_service::SessionService;
