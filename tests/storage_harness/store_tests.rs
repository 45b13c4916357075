//! Macro-generated test suite for `EntityStore` contract validation.
//!
//! The `entity_store_tests!` macro generates a test module that validates a
//! pair of `EntityStore<Movie>` / `EntityStore<Director>` implementations
//! against the full contract: lookup, listing, insertion, partial update,
//! deletion, field search and concurrent inserts.
//!
//! Identifiers the backend cannot parse are backend-specific and are tested
//! next to each backend's instantiation.
//!
//! # Generated Tests
//!
//! ## Insert & Get
//! - `test_insert_and_get` — insert then retrieve, deep-equal
//! - `test_insert_assigns_unique_ids` — ids are non-empty and distinct
//! - `test_insert_partial_fields` — unset fields stay unset
//! - `test_get_nonexistent` — well-formed unknown id returns None
//!
//! ## List
//! - `test_list_empty` — empty collection returns empty vec
//! - `test_list_multiple` — all inserted entities are listed
//!
//! ## Update
//! - `test_update_partial` — only set fields change, result is post-update
//! - `test_update_empty_patch` — empty patch returns the unchanged entity
//! - `test_update_nonexistent` — unknown id returns None
//!
//! ## Delete
//! - `test_delete_returns_previous` — delete returns the removed entity
//! - `test_delete_twice` — second delete returns None
//!
//! ## Search & concurrency
//! - `test_find_by_director_id` — movies filtered by `directorId`
//! - `test_concurrent_inserts` — parallel inserts from spawned tasks

/// Generate a full `EntityStore` conformance test suite.
///
/// `$movies` and `$directors` must be expressions evaluating to an
/// `EntityStore<Movie>` and an `EntityStore<Director>` over empty
/// collections. They are re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! entity_store_tests {
    ($movies:expr, $directors:expr) => {
        mod entity_store_contract_tests {
            use super::*;
            use cinema::core::{EntityStore, StoreResult};
            use cinema::entities::{Director, DirectorPatch, Movie, MoviePatch};
            use std::collections::HashSet;
            use std::sync::Arc;

            /// Well-formed for every backend, never assigned
            const UNKNOWN_ID: &str = "000000000000000000000000";

            async fn movies() -> Arc<dyn EntityStore<Movie>> {
                Arc::new($movies)
            }

            async fn directors() -> Arc<dyn EntityStore<Director>> {
                Arc::new($directors)
            }

            // ==================================================================
            // Insert & Get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get() {
                let store = directors().await;

                let created = store.insert(director_fields("Nolan", 53)).await.unwrap();
                assert_eq!(created.name.as_deref(), Some("Nolan"));
                assert_eq!(created.age, Some(53));

                let retrieved = store.get(&created.id).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_insert_assigns_unique_ids() {
                let store = directors().await;
                let mut ids = HashSet::new();

                for fields in sample_directors(5) {
                    let created = store.insert(fields).await.unwrap();
                    assert!(!created.id.is_empty());
                    ids.insert(created.id);
                }

                assert_eq!(ids.len(), 5, "every insert should get a fresh id");
            }

            #[tokio::test]
            async fn test_insert_partial_fields() {
                let store = movies().await;

                let created = store
                    .insert(MoviePatch {
                        name: Some("Untitled".to_string()),
                        ..Default::default()
                    })
                    .await
                    .unwrap();

                let retrieved = store.get(&created.id).await.unwrap().unwrap();
                assert_eq!(retrieved.name.as_deref(), Some("Untitled"));
                assert_eq!(retrieved.genre, None);
                assert_eq!(retrieved.director_id, None);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = movies().await;

                let result = store.get(UNKNOWN_ID).await.unwrap();
                assert!(result.is_none(), "unknown id should return None");
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = movies().await;

                let all = store.list().await.unwrap();
                assert!(all.is_empty(), "list on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let store = directors().await;
                let mut expected = HashSet::new();

                for fields in sample_directors(4) {
                    expected.insert(store.insert(fields).await.unwrap().id);
                }

                let listed: HashSet<String> =
                    store.list().await.unwrap().into_iter().map(|d| d.id).collect();
                assert_eq!(listed, expected);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_partial() {
                let store = movies().await;
                let created = store
                    .insert(movie_fields("The Thing", "Sci-Fi", "d1"))
                    .await
                    .unwrap();

                let updated = store
                    .update(
                        &created.id,
                        MoviePatch {
                            genre: Some("Horror".to_string()),
                            ..Default::default()
                        },
                    )
                    .await
                    .unwrap()
                    .expect("existing movie should be updated");

                assert_eq!(updated.id, created.id);
                assert_eq!(updated.name.as_deref(), Some("The Thing"));
                assert_eq!(updated.genre.as_deref(), Some("Horror"));
                assert_eq!(updated.director_id.as_deref(), Some("d1"));

                let retrieved = store.get(&created.id).await.unwrap();
                assert_eq!(retrieved, Some(updated));
            }

            #[tokio::test]
            async fn test_update_empty_patch() {
                let store = directors().await;
                let created = store.insert(director_fields("Varda", 90)).await.unwrap();

                let result = store
                    .update(&created.id, DirectorPatch::default())
                    .await
                    .unwrap();
                assert_eq!(result, Some(created));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = directors().await;

                let result = store
                    .update(UNKNOWN_ID, director_fields("Ghost", 1))
                    .await
                    .unwrap();
                assert!(result.is_none());
                assert!(store.list().await.unwrap().is_empty(), "update must not upsert");
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_returns_previous() {
                let store = directors().await;
                let created = store.insert(director_fields("Kurosawa", 88)).await.unwrap();

                let removed = store.delete(&created.id).await.unwrap();
                assert_eq!(removed, Some(created.clone()));
                assert!(store.get(&created.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_twice() {
                let store = movies().await;
                let created = store
                    .insert(movie_fields("Tenet", "Sci-Fi", "d1"))
                    .await
                    .unwrap();

                assert!(store.delete(&created.id).await.unwrap().is_some());
                assert!(store.delete(&created.id).await.unwrap().is_none());
                assert!(store.delete(UNKNOWN_ID).await.unwrap().is_none());
            }

            // ==================================================================
            // Search & concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_director_id() {
                let store = movies().await;
                store.insert(movie_fields("Memento", "Thriller", "d1")).await.unwrap();
                store.insert(movie_fields("Alien", "Horror", "d2")).await.unwrap();
                store.insert(movie_fields("Tenet", "Sci-Fi", "d1")).await.unwrap();

                let mut names: Vec<String> = store
                    .find_by("directorId", "d1")
                    .await
                    .unwrap()
                    .into_iter()
                    .filter_map(|m| m.name)
                    .collect();
                names.sort();
                assert_eq!(names, vec!["Memento", "Tenet"]);

                assert!(store.find_by("directorId", "d9").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let store = directors().await;

                let handles: Vec<_> = sample_directors(10)
                    .into_iter()
                    .map(|fields| {
                        let store = Arc::clone(&store);
                        tokio::spawn(async move { store.insert(fields).await })
                    })
                    .collect();

                for handle in handles {
                    let result: StoreResult<Director> = handle.await.unwrap();
                    result.unwrap();
                }

                assert_eq!(store.list().await.unwrap().len(), 10);
            }
        }
    };
}
