// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - Input DTOs reject unknown fields instead of silently dropping them
// - Conversion FROM domain entities, and INTO domain requests

use serde::{Deserialize, Serialize};

use crate::domain::{
    CatalogEntry, CatalogEntryPatch, FilterParams, GenreFilter, NewCatalogEntry, Theme,
};
use crate::services::CatalogView;

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genres: Vec<String>,
    pub thumbnail_url: String,
    pub rating: f64,
    pub release_date: String,
    pub is_favorite: bool,
}

/// Admin form submission. Missing required fields are reported by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEntryDto {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub release_date: Option<String>,
}

/// Partial edit. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEntryDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genres: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<String>,
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterDto {
    pub search_text: Option<String>,
    /// `None`, blank or "All" means no genre filter
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub favorites_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewDto {
    pub results: Vec<CatalogEntryDto>,
    /// Facet labels, "All" first
    pub genres: Vec<String>,
}

// ============================================================================
// PREFERENCE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDto {
    pub theme: String,
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

impl From<&CatalogEntry> for CatalogEntryDto {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            genres: entry.genres.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
            rating: entry.rating,
            release_date: entry.release_date.clone(),
            is_favorite: entry.is_favorite,
        }
    }
}

impl From<CatalogEntry> for CatalogEntryDto {
    fn from(entry: CatalogEntry) -> Self {
        Self::from(&entry)
    }
}

impl From<CatalogView<'_>> for CatalogViewDto {
    fn from(view: CatalogView<'_>) -> Self {
        Self {
            results: view.results.into_iter().map(CatalogEntryDto::from).collect(),
            genres: view.genres.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl From<Theme> for ThemeDto {
    fn from(theme: Theme) -> Self {
        Self {
            theme: theme.to_string(),
        }
    }
}

impl From<CreateEntryDto> for NewCatalogEntry {
    fn from(dto: CreateEntryDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            thumbnail_url: dto.thumbnail_url.unwrap_or_default(),
            description: dto.description,
            genres: dto.genres,
            rating: dto.rating,
            release_date: dto.release_date,
        }
    }
}

impl From<UpdateEntryDto> for CatalogEntryPatch {
    fn from(dto: UpdateEntryDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            genres: dto.genres,
            thumbnail_url: dto.thumbnail_url,
            rating: dto.rating,
            release_date: dto.release_date,
            is_favorite: dto.is_favorite,
        }
    }
}

impl From<FilterDto> for FilterParams {
    fn from(dto: FilterDto) -> Self {
        let genre = dto.genre.filter(|g| g != "All");

        Self {
            search_text: dto.search_text.unwrap_or_default(),
            genre: GenreFilter::from_option(genre),
            min_rating: dto.min_rating.unwrap_or(0.0),
            favorites_only: dto.favorites_only,
        }
    }
}
