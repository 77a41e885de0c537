use super::entity::CatalogEntry;
use crate::domain::{DomainError, DomainResult};

/// Validates all CatalogEntry invariants
/// Presence is checked for required text; rating only has to be a finite number
pub fn validate_catalog_entry(entry: &CatalogEntry) -> DomainResult<()> {
    validate_required("title", &entry.title)?;
    validate_required("thumbnailUrl", &entry.thumbnail_url)?;
    validate_rating(entry.rating)?;
    Ok(())
}

// JSON has no representation for NaN or infinity
fn validate_rating(rating: f64) -> DomainResult<()> {
    if !rating.is_finite() {
        return Err(DomainError::Validation(format!(
            "rating must be a finite number, got {}",
            rating
        )));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Invariants that must hold true for CatalogEntry:
///
/// 1. Title is never blank
/// 2. Thumbnail URL is never blank
/// 3. Identity (id) is immutable
/// 4. Genres are never empty (defaulted on create and on patch)
/// 5. Rating is finite but not range-checked
