//! Shared test harness for storage backend testing
//!
//! Provides sample patches for movies and directors plus two test-suite
//! macros that any backend can instantiate:
//! - `entity_store_tests!` validates the `EntityStore` contract directly
//! - `graphql_http_tests!` drives the full HTTP → GraphQL → store path
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! entity_store_tests!(InMemoryStore::<Movie>::new(), InMemoryStore::<Director>::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_tests;


use cinema::entities::{DirectorPatch, MoviePatch};

// ---------------------------------------------------------------------------
// Factory helpers
// ---------------------------------------------------------------------------

/// Build a director patch with both fields set
pub fn director_fields(name: &str, age: i32) -> DirectorPatch {
    DirectorPatch {
        name: Some(name.to_string()),
        age: Some(age),
    }
}

/// Build a movie patch with every field set
pub fn movie_fields(name: &str, genre: &str, director_id: &str) -> MoviePatch {
    MoviePatch {
        name: Some(name.to_string()),
        genre: Some(genre.to_string()),
        director_id: Some(director_id.to_string()),
    }
}

/// A batch of `count` distinct directors
pub fn sample_directors(count: usize) -> Vec<DirectorPatch> {
    (0..count)
        .map(|i| director_fields(&format!("Director {}", i), 30 + i as i32))
        .collect()
}
