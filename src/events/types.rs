// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are emitted only after the change is persisted
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($ty) }
        }
    };
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a new entry was added to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: String,
    pub title: String,
}

impl CatalogEntryCreated {
    pub fn new(entry_id: String, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            title,
        }
    }
}

impl_domain_event!(CatalogEntryCreated);

/// Emitted when an entry was patched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: String,
}

impl CatalogEntryUpdated {
    pub fn new(entry_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
        }
    }
}

impl_domain_event!(CatalogEntryUpdated);

/// Emitted when an entry was removed (not emitted for no-op deletes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntryDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: String,
}

impl CatalogEntryDeleted {
    pub fn new(entry_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
        }
    }
}

impl_domain_event!(CatalogEntryDeleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: String,
    pub is_favorite: bool,
}

impl FavoriteToggled {
    pub fn new(entry_id: String, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            is_favorite,
        }
    }
}

impl_domain_event!(FavoriteToggled);

// ============================================================================
// PREFERENCE EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub theme: String, // "light" or "dark"
}

impl ThemeChanged {
    pub fn new(theme: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            theme,
        }
    }
}

impl_domain_event!(ThemeChanged);
