use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Genre facet selected in the listing.
///
/// `All` is the "no filter" sentinel and always leads the facet list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    /// `None` or a blank tag means no filter
    pub fn from_option(genre: Option<String>) -> Self {
        match genre {
            Some(g) if !g.trim().is_empty() => GenreFilter::Genre(g),
            _ => GenreFilter::All,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }
}

impl std::fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenreFilter::All => write!(f, "All"),
            GenreFilter::Genre(g) => write!(f, "{}", g),
        }
    }
}

/// User-supplied listing filters. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    pub search_text: String,
    pub genre: GenreFilter,
    pub min_rating: f64,
    pub favorites_only: bool,
}

impl FilterParams {
    pub fn favorites() -> Self {
        Self {
            favorites_only: true,
            ..Default::default()
        }
    }
}

/// The only constraint on filters: a non-negative, non-NaN minimum rating
pub fn validate_filter_params(params: &FilterParams) -> DomainResult<()> {
    if params.min_rating.is_nan() || params.min_rating < 0.0 {
        return Err(DomainError::Validation(format!(
            "minRating must be >= 0, got {}",
            params.min_rating
        )));
    }
    Ok(())
}
