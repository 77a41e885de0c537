// src/services/catalog_store_tests.rs
//
// Catalog store behaviour, end to end through a real repository.
//
// INVARIANTS TESTED:
// - Ids are unique and never change
// - Rejected operations leave the collection and storage untouched
// - Every successful mutation is visible after reopening the storage
// - Decode failures degrade to the seed set

#[cfg(test)]
mod store_tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::domain::{
        CatalogEntryPatch, FilterParams, NewCatalogEntry, DEFAULT_GENRE, DEFAULT_RATING,
    };
    use crate::error::AppError;
    use crate::events::{CatalogEntryCreated, EventBus, FavoriteToggled};
    use crate::infrastructure::storage::MockStorage;
    use crate::infrastructure::{MemoryStorage, Storage};
    use crate::repositories::{StorageCatalogRepository, CATALOG_KEY};
    use crate::services::{CatalogQuery, CatalogStore};

    fn open(storage: Arc<dyn Storage>) -> CatalogStore {
        let repo = Arc::new(StorageCatalogRepository::new(storage));
        CatalogStore::open(repo, Arc::new(EventBus::new()))
    }

    fn new_entry(title: &str, thumbnail_url: &str) -> NewCatalogEntry {
        NewCatalogEntry {
            title: title.to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_storage_starts_from_seed_without_writing() {
        let storage = Arc::new(MemoryStorage::new());
        let store = open(storage.clone());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert!(snapshot.iter().all(|e| !e.is_favorite));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_corrupt_payload_degrades_to_seed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(CATALOG_KEY, b"[{\"id\": 1").unwrap();

        let store = open(storage);

        assert_eq!(store.len(), 4);
        assert!(store.get("g1").is_some());
    }

    #[test]
    fn test_unreadable_storage_degrades_to_seed() {
        let mut storage = MockStorage::new();
        storage
            .expect_read()
            .returning(|_| Err(AppError::Other("device gone".to_string())));

        let store = open(Arc::new(storage));

        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_prepends_entry_with_fresh_id() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let before: HashSet<String> = store.snapshot().iter().map(|e| e.id.clone()).collect();

        let created = store.create(new_entry("Moonlit Harbor", "u")).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), before.len() + 1);
        assert_eq!(snapshot[0], created);
        assert!(!before.contains(&created.id));
        assert_eq!(snapshot.iter().filter(|e| e.id == created.id).count(), 1);
    }

    #[test]
    fn test_create_requires_title_and_thumbnail() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open(storage.clone());
        let before = store.snapshot();

        let err = store.create(new_entry("", "u")).unwrap_err();
        assert!(err.is_validation());

        let err = store.create(new_entry("Moonlit Harbor", "  ")).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.snapshot(), before);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_second_create_rejected_keeps_first() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let start = store.len();

        store.create(new_entry("X", "u")).unwrap();
        assert!(store.create(new_entry("", "u2")).is_err());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), start + 1);
        assert_eq!(snapshot[0].title, "X");
        assert_eq!(snapshot[0].rating, DEFAULT_RATING);
        assert_eq!(snapshot[0].genres, vec![DEFAULT_GENRE.to_string()]);
    }

    #[test]
    fn test_non_finite_rating_is_rejected() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open(storage.clone());
        store.delete("g1").unwrap();
        let before = store.snapshot();

        let err = store
            .create(NewCatalogEntry {
                rating: Some(f64::INFINITY),
                ..new_entry("X", "u")
            })
            .unwrap_err();
        assert!(err.is_validation());

        let err = store
            .update(
                "g2",
                CatalogEntryPatch {
                    rating: Some(f64::NAN),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.snapshot(), before);

        let reloaded = open(storage);
        assert_eq!(reloaded.snapshot(), before);
        assert!(reloaded.get("g1").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let storage = Arc::new(MemoryStorage::new());
        let record = |id: &str, title: &str| {
            serde_json::json!({
                "id": id,
                "title": title,
                "genres": ["RPG"],
                "thumbnailUrl": "u",
                "rating": 4.0,
                "releaseDate": "2024-01-01"
            })
        };
        let payload = serde_json::json!([
            record("a", "First"),
            record("b", "Other"),
            record("a", "Second")
        ]);
        let bytes = payload.to_string();
        storage.write(CATALOG_KEY, bytes.as_bytes()).unwrap();

        let mut store = open(storage);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").map(|e| e.title.as_str()), Some("First"));

        assert!(store.delete("a").unwrap());
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let before = store.snapshot();

        let err = store
            .update(
                "missing",
                CatalogEntryPatch {
                    rating: Some(1.0),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref id) if id == "missing"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_empty_patch_leaves_entry_unchanged() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let original = store.get("g3").cloned().unwrap();

        let updated = store.update("g3", CatalogEntryPatch::default()).unwrap();

        assert_eq!(updated, original);
        assert_eq!(store.get("g3"), Some(&original));
    }

    #[test]
    fn test_update_merges_fields_and_keeps_id_and_position() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let original = store.get("g2").cloned().unwrap();

        let updated = store
            .update(
                "g2",
                CatalogEntryPatch {
                    title: Some("Neon Drift: Remastered".to_string()),
                    rating: Some(4.9),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, "g2");
        assert_eq!(updated.title, "Neon Drift: Remastered");
        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.genres, original.genres);
        assert_eq!(store.snapshot()[1].id, "g2");
    }

    #[test]
    fn test_update_cannot_blank_required_fields() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let before = store.snapshot();

        let err = store
            .update(
                "g1",
                CatalogEntryPatch {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        let err = store
            .update(
                "g1",
                CatalogEntryPatch {
                    thumbnail_url: Some(" ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_state() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let before = store.snapshot();

        assert!(store.toggle_favorite("g4").unwrap().is_favorite);
        assert!(!store.toggle_favorite("g4").unwrap().is_favorite);

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        assert!(store.toggle_favorite("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = open(Arc::new(MemoryStorage::new()));

        assert!(store.delete("g1").unwrap());
        let after_first = store.snapshot();

        assert!(!store.delete("g1").unwrap());
        assert_eq!(store.snapshot(), after_first);
        assert_eq!(after_first.len(), 3);
    }

    #[test]
    fn test_delete_unknown_id_writes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open(storage.clone());

        assert!(!store.delete("nope").unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutations() {
        let mut store = open(Arc::new(MemoryStorage::new()));
        let snapshot = store.snapshot();

        store.delete("g1").unwrap();
        store.toggle_favorite("g2").unwrap();

        assert_eq!(snapshot.len(), 4);
        assert!(snapshot.iter().all(|e| !e.is_favorite));
    }

    #[test]
    fn test_favorite_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = open(storage.clone());

        store.toggle_favorite("g2").unwrap();

        let snapshot = store.snapshot();
        let favorites = CatalogQuery::filter(&snapshot, &FilterParams::favorites());
        let ids: Vec<&str> = favorites.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["g2"]);

        let reloaded = open(storage);
        assert_eq!(reloaded.get("g2").map(|e| e.is_favorite), Some(true));
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn test_failed_write_leaves_collection_unchanged() {
        let mut storage = MockStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .returning(|_, _| Err(AppError::Other("disk full".to_string())));

        let mut store = open(Arc::new(storage));
        let before = store.snapshot();

        assert!(store.create(new_entry("X", "u")).is_err());
        assert!(store.toggle_favorite("g1").is_err());
        assert!(store.delete("g2").is_err());

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_every_mutation_writes_the_whole_collection() {
        let mut storage = MockStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .withf(|key, bytes| {
                key == CATALOG_KEY
                    && serde_json::from_slice::<Vec<serde_json::Value>>(bytes)
                        .map(|v| v.len() == 5)
                        .unwrap_or(false)
            })
            .times(2)
            .returning(|_, _| Ok(()));

        let mut store = open(Arc::new(storage));
        let created = store.create(new_entry("X", "u")).unwrap();
        store.toggle_favorite(&created.id).unwrap();
    }

    #[test]
    fn test_subscribers_see_committed_state() {
        let bus = Arc::new(EventBus::new());
        let storage = Arc::new(MemoryStorage::new());
        let repo = Arc::new(StorageCatalogRepository::new(storage.clone()));
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<FavoriteToggled, _>(move |event| {
            seen_clone
                .lock()
                .unwrap()
                .push((event.entry_id.clone(), event.is_favorite));
        });
        let created_count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let created_clone = Arc::clone(&created_count);
        bus.subscribe::<CatalogEntryCreated, _>(move |_| {
            created_clone.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        let mut store = CatalogStore::open(repo, bus);
        store.toggle_favorite("g2").unwrap();
        store.create(new_entry("X", "u")).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![("g2".to_string(), true)]);
        assert_eq!(created_count.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(storage.read(CATALOG_KEY).unwrap().is_some());
    }

    #[test]
    fn test_mutations_emit_events() {
        let bus = Arc::new(EventBus::new());
        let repo = Arc::new(StorageCatalogRepository::new(Arc::new(MemoryStorage::new())));
        let mut store = CatalogStore::open(repo, bus.clone());

        store.create(new_entry("X", "u")).unwrap();
        store.toggle_favorite("g1").unwrap();
        store.delete("missing").unwrap();

        let log = bus.get_event_log();
        let types: Vec<&str> = log.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(types, vec!["CatalogEntryCreated", "FavoriteToggled"]);
    }
}
