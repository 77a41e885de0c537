// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Catalog
    CatalogEntryCreated,
    CatalogEntryDeleted,
    CatalogEntryUpdated,
    FavoriteToggled,
    // Preferences
    ThemeChanged,
};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};
