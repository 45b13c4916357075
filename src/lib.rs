//! # Cinema Graph
//!
//! A GraphQL API over two document collections, movies and directors,
//! backed by MongoDB (or an in-memory store for development and tests).
//!
//! ## Features
//!
//! - **Four queries**: `movie(id)`, `director(id)`, `movies`, `directors`
//! - **Six mutations**: `addMovie`, `addDirector`, `updateMovie`,
//!   `updateDirector`, `deleteMovie`, `deleteDirector`
//! - **Partial updates**: `update*` only apply arguments that are present and
//!   truthy; `""` and `0` leave the stored value unchanged
//! - **Null, not errors**: unknown identifiers resolve to `null`
//! - **Unchecked references**: `Movie.directorId` is never validated, and
//!   deleting a director does not touch its movies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cinema::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_in_memory_stores()
//!         .with_playground(true)
//!         .serve("127.0.0.1:4000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{Entity, EntityPatch, EntityStore, StoreError, StoreResult};

    // === Entities ===
    pub use crate::entities::{Director, DirectorPatch, Movie, MoviePatch};

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoStore;

    // === Config ===
    pub use crate::config::{AppConfig, GraphQLConfig, ServerConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::exposure::graphql::{CinemaSchema, build_schema};
    pub use crate::server::{GraphQLExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
