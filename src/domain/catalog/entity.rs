use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating given to an entry created without one
pub const DEFAULT_RATING: f64 = 3.5;

/// Genre tag given to an entry created without any genre
pub const DEFAULT_GENRE: &str = "Other";

/// A game listed in the catalog
///
/// Field names are serialized in camelCase so the persisted payload keeps the
/// same layout the browser storage used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Opaque identifier, assigned once at creation
    pub id: String,

    /// Display title, never blank
    pub title: String,

    /// Free text shown on the detail view
    #[serde(default)]
    pub description: String,

    /// Ordered genre tags
    pub genres: Vec<String>,

    /// Cover image location, never blank
    pub thumbnail_url: String,

    /// Score, conventionally 0.0..=5.0 (not enforced)
    pub rating: f64,

    /// Release date as entered (`YYYY-MM-DD` when defaulted)
    pub release_date: String,

    #[serde(default)]
    pub is_favorite: bool,
}

/// Input accepted by the catalog store when creating an entry.
/// Blank `title` or `thumbnail_url` is treated as missing.
#[derive(Debug, Clone, Default)]
pub struct NewCatalogEntry {
    pub title: String,
    pub thumbnail_url: String,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub release_date: Option<String>,
}

/// Partial update for an existing entry.
///
/// `None` leaves the current value untouched; `Some` replaces it.
/// The id is not part of the patch and can never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<String>,
    pub is_favorite: Option<bool>,
}

impl CatalogEntry {
    /// Build a new entry from creation input, assigning a fresh id and
    /// filling every omitted field with its default.
    pub fn new(input: NewCatalogEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            genres: normalize_genres(input.genres.unwrap_or_default()),
            thumbnail_url: input.thumbnail_url,
            rating: input.rating.unwrap_or(DEFAULT_RATING),
            release_date: input.release_date.unwrap_or_else(today),
            is_favorite: false,
        }
    }

    /// Merge a patch onto this entry, field by field
    pub fn apply_patch(&mut self, patch: CatalogEntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(genres) = patch.genres {
            self.genres = normalize_genres(genres);
        }
        if let Some(thumbnail_url) = patch.thumbnail_url {
            self.thumbnail_url = thumbnail_url;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(release_date) = patch.release_date {
            self.release_date = release_date;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Exact, case-sensitive tag membership
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl CatalogEntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1})", self.title, self.rating)
    }
}

/// Trim tags and drop blank ones; an empty result falls back to the default genre
pub fn normalize_genres(genres: Vec<String>) -> Vec<String> {
    let tags: Vec<String> = genres
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    if tags.is_empty() {
        vec![DEFAULT_GENRE.to_string()]
    } else {
        tags
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
