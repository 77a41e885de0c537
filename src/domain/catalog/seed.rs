use super::entity::CatalogEntry;

/// The bundled catalog used when nothing usable is persisted yet
pub fn seed_catalog() -> Vec<CatalogEntry> {
    vec![
        seed(
            "g1",
            "Starfall Odyssey",
            "Chart a course across a collapsing galaxy in this open-world space RPG.",
            &["RPG", "Adventure"],
            "https://picsum.photos/seed/starfall/400/225",
            4.7,
            "2023-03-14",
        ),
        seed(
            "g2",
            "Neon Drift",
            "Arcade street racing through a rain-soaked synthwave city.",
            &["Racing", "Arcade"],
            "https://picsum.photos/seed/neondrift/400/225",
            4.2,
            "2022-11-02",
        ),
        seed(
            "g3",
            "Hollow Keep",
            "A hand-drawn action platformer set in the ruins of a buried kingdom.",
            &["Action", "Platformer", "Indie"],
            "https://picsum.photos/seed/hollowkeep/400/225",
            4.5,
            "2021-08-19",
        ),
        seed(
            "g4",
            "Tactica Prime",
            "Turn-based squad tactics with permadeath and a branching campaign.",
            &["Strategy", "RPG"],
            "https://picsum.photos/seed/tactica/400/225",
            3.9,
            "2024-01-30",
        ),
    ]
}

fn seed(
    id: &str,
    title: &str,
    description: &str,
    genres: &[&str],
    thumbnail_url: &str,
    rating: f64,
    release_date: &str,
) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        thumbnail_url: thumbnail_url.to_string(),
        rating,
        release_date: release_date.to_string(),
        is_favorite: false,
    }
}
