// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod filter;
pub mod preferences;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog Domain
pub use catalog::{
    normalize_genres, seed_catalog, validate_catalog_entry, CatalogEntry, CatalogEntryPatch,
    NewCatalogEntry, DEFAULT_GENRE, DEFAULT_RATING,
};

// Listing filters (ephemeral)
pub use filter::{validate_filter_params, FilterParams, GenreFilter};

// Preferences
pub use preferences::Theme;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
