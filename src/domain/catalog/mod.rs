pub mod entity;
pub mod invariants;
pub mod seed;

pub use entity::{
    normalize_genres, CatalogEntry, CatalogEntryPatch, NewCatalogEntry, DEFAULT_GENRE,
    DEFAULT_RATING,
};
pub use invariants::validate_catalog_entry;
pub use seed::seed_catalog;
