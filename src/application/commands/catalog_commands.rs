// src/application/commands/catalog_commands.rs
//
// Catalog Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::dto::*;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{validate_filter_params, FilterParams};
use crate::error::AppError;
use crate::services::CatalogQuery;

/// Visible entries and genre facets for the given filters
pub fn list_entries(state: &AppState, filter: FilterDto) -> Result<CatalogViewDto, String> {
    let params = FilterParams::from(filter);
    validate_filter_params(&params)
        .map_err(AppError::Domain)
        .to_error_response()?;

    // Query a snapshot so the store lock is not held while deriving
    let snapshot = state
        .catalog()
        .map(|store| store.snapshot())
        .to_error_response()?;

    Ok(CatalogQuery::derive(&snapshot, &params).into())
}

/// Genre facet labels, "All" first
pub fn list_genres(state: &AppState) -> Result<Vec<String>, String> {
    let snapshot = state
        .catalog()
        .map(|store| store.snapshot())
        .to_error_response()?;

    Ok(CatalogQuery::genre_facets(&snapshot)
        .iter()
        .map(|g| g.to_string())
        .collect())
}

/// Detail view
pub fn get_entry(state: &AppState, id: &str) -> Result<Option<CatalogEntryDto>, String> {
    state
        .catalog()
        .map(|store| store.get(id).map(CatalogEntryDto::from))
        .to_error_response()
}

pub fn create_entry(state: &AppState, dto: CreateEntryDto) -> Result<CatalogEntryDto, String> {
    state
        .catalog()
        .and_then(|mut store| store.create(dto.into()))
        .map(CatalogEntryDto::from)
        .to_error_response()
}

pub fn update_entry(
    state: &AppState,
    id: &str,
    dto: UpdateEntryDto,
) -> Result<CatalogEntryDto, String> {
    state
        .catalog()
        .and_then(|mut store| store.update(id, dto.into()))
        .map(CatalogEntryDto::from)
        .to_error_response()
}

/// Returns whether an entry was removed
pub fn delete_entry(state: &AppState, id: &str) -> Result<bool, String> {
    state
        .catalog()
        .and_then(|mut store| store.delete(id))
        .to_error_response()
}

pub fn toggle_favorite(state: &AppState, id: &str) -> Result<CatalogEntryDto, String> {
    state
        .catalog()
        .and_then(|mut store| store.toggle_favorite(id))
        .map(CatalogEntryDto::from)
        .to_error_response()
}
