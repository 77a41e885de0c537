// src/services/catalog_query.rs
//
// Listing derivation: filters, genre facets and ordering.
// Pure functions over a borrowed collection; nothing here mutates or persists.

use std::collections::HashSet;

use crate::domain::{CatalogEntry, FilterParams, GenreFilter};

/// Everything the listing page renders for one set of filters
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// Matching entries, best rated first
    pub results: Vec<&'a CatalogEntry>,

    /// `All` followed by every distinct genre in the collection
    pub genres: Vec<GenreFilter>,
}

pub struct CatalogQuery;

impl CatalogQuery {
    /// Results and facets in one pass over `entries`
    pub fn derive<'a>(entries: &'a [CatalogEntry], params: &FilterParams) -> CatalogView<'a> {
        CatalogView {
            results: Self::filter(entries, params),
            genres: Self::genre_facets(entries),
        }
    }

    /// Apply the filters in order (favorites, genre, rating, text), then
    /// sort by rating descending. The sort is stable, so equal ratings keep
    /// their collection order.
    pub fn filter<'a>(entries: &'a [CatalogEntry], params: &FilterParams) -> Vec<&'a CatalogEntry> {
        let needle = params.search_text.trim().to_lowercase();

        let mut results: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|e| !params.favorites_only || e.is_favorite)
            .filter(|e| match &params.genre {
                GenreFilter::All => true,
                GenreFilter::Genre(genre) => e.has_genre(genre),
            })
            .filter(|e| e.rating >= params.min_rating)
            .filter(|e| needle.is_empty() || e.matches_text(&needle))
            .collect();

        results.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        log::debug!(
            "Catalog query matched {} of {} entries",
            results.len(),
            entries.len()
        );
        results
    }

    /// Distinct genres across the whole collection in first-seen order,
    /// led by the `All` sentinel. Independent of any active filter.
    pub fn genre_facets(entries: &[CatalogEntry]) -> Vec<GenreFilter> {
        let mut seen = HashSet::new();
        let mut facets = vec![GenreFilter::All];

        for genre in entries.iter().flat_map(|e| e.genres.iter()) {
            if seen.insert(genre.as_str()) {
                facets.push(GenreFilter::Genre(genre.clone()));
            }
        }

        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, rating: f64, genres: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: format!("Game {}", id),
            description: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            thumbnail_url: "u".to_string(),
            rating,
            release_date: "2024-01-01".to_string(),
            is_favorite: false,
        }
    }

    fn ids(results: &[&CatalogEntry]) -> Vec<String> {
        results.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_sort_is_stable_for_equal_ratings() {
        let entries = vec![
            entry("a", 3.0, &["RPG"]),
            entry("b", 4.5, &["RPG"]),
            entry("c", 4.5, &["RPG"]),
            entry("d", 2.0, &["RPG"]),
        ];

        let results = CatalogQuery::filter(&entries, &FilterParams::default());

        assert_eq!(ids(&results), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_genre_filter_is_exact_and_case_sensitive() {
        let entries = vec![
            entry("a", 3.0, &["RPG"]),
            entry("b", 4.0, &["rpg"]),
            entry("c", 5.0, &["Action RPG"]),
        ];
        let params = FilterParams {
            genre: GenreFilter::Genre("RPG".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&CatalogQuery::filter(&entries, &params)), vec!["a"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let entries = vec![entry("a", 3.9, &[]), entry("b", 4.0, &[]), entry("c", 4.1, &[])];
        let params = FilterParams {
            min_rating: 4.0,
            ..Default::default()
        };

        assert_eq!(ids(&CatalogQuery::filter(&entries, &params)), vec!["c", "b"]);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let mut with_description = entry("a", 3.0, &[]);
        with_description.description = "Drift through NEON streets".to_string();
        let mut with_title = entry("b", 4.0, &[]);
        with_title.title = "Neon Drift".to_string();
        let other = entry("c", 5.0, &[]);
        let entries = vec![with_description, with_title, other];

        let params = FilterParams {
            search_text: "  neon ".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&CatalogQuery::filter(&entries, &params)), vec!["b", "a"]);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let entries = vec![entry("a", 3.0, &[]), entry("b", 4.0, &[])];
        let params = FilterParams {
            search_text: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(CatalogQuery::filter(&entries, &params).len(), 2);
    }

    #[test]
    fn test_favorites_only() {
        let mut fav = entry("a", 1.0, &[]);
        fav.is_favorite = true;
        let entries = vec![fav, entry("b", 5.0, &[])];

        assert_eq!(
            ids(&CatalogQuery::filter(&entries, &FilterParams::favorites())),
            vec!["a"]
        );
    }

    #[test]
    fn test_min_rating_is_monotonic() {
        let entries: Vec<CatalogEntry> = [0.0, 1.5, 2.5, 3.5, 3.5, 4.0, 5.0, 7.0]
            .iter()
            .enumerate()
            .map(|(i, r)| entry(&i.to_string(), *r, &[]))
            .collect();

        let thresholds = [0.0, 1.0, 2.5, 3.5, 4.5, 6.0];
        for pair in thresholds.windows(2) {
            let low = FilterParams {
                min_rating: pair[0],
                ..Default::default()
            };
            let high = FilterParams {
                min_rating: pair[1],
                ..Default::default()
            };

            let low_ids: HashSet<String> = ids(&CatalogQuery::filter(&entries, &low))
                .into_iter()
                .collect();
            let high_ids: HashSet<String> = ids(&CatalogQuery::filter(&entries, &high))
                .into_iter()
                .collect();

            assert!(high_ids.is_subset(&low_ids), "{} vs {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_genre_facets_first_seen_order_over_whole_collection() {
        let mut fav = entry("a", 1.0, &["Racing", "Arcade"]);
        fav.is_favorite = true;
        let entries = vec![
            fav,
            entry("b", 2.0, &["RPG", "Racing"]),
            entry("c", 3.0, &["Arcade", "Indie"]),
        ];

        let view = CatalogQuery::derive(&entries, &FilterParams::favorites());

        assert_eq!(view.results.len(), 1);
        assert_eq!(
            view.genres,
            vec![
                GenreFilter::All,
                GenreFilter::Genre("Racing".to_string()),
                GenreFilter::Genre("Arcade".to_string()),
                GenreFilter::Genre("RPG".to_string()),
                GenreFilter::Genre("Indie".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_collection() {
        let view = CatalogQuery::derive(&[], &FilterParams::default());
        assert!(view.results.is_empty());
        assert_eq!(view.genres, vec![GenreFilter::All]);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let entries = vec![entry("a", 1.0, &["X"]), entry("b", 5.0, &["Y"])];
        let before = entries.clone();

        let _ = CatalogQuery::derive(&entries, &FilterParams::default());

        assert_eq!(entries, before);
    }
}
