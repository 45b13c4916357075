//! Server host for transport-agnostic API exposure
//!
//! This module provides a `ServerHost` structure that holds the two entity
//! stores. It is the only state the exposure layer sees: resolvers read the
//! stores from it and hold nothing else between calls.

use crate::core::EntityStore;
use crate::entities::{Director, Movie};
use std::sync::Arc;

/// Host context containing the entity stores
///
/// The host is immutable once built and shared as `Arc<ServerHost>`.
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(
///     Arc::new(InMemoryStore::<Movie>::new()),
///     Arc::new(InMemoryStore::<Director>::new()),
/// ));
/// let graphql_app = GraphQLExposure::build_router(host, false);
/// ```
#[derive(Clone)]
pub struct ServerHost {
    /// Movie collection
    pub movies: Arc<dyn EntityStore<Movie>>,

    /// Director collection
    pub directors: Arc<dyn EntityStore<Director>>,
}

impl ServerHost {
    /// Build the host from its two stores
    pub fn new(
        movies: Arc<dyn EntityStore<Movie>>,
        directors: Arc<dyn EntityStore<Director>>,
    ) -> Self {
        Self { movies, directors }
    }

    /// Build a host backed by fresh in-memory stores
    #[cfg(feature = "in-memory")]
    pub fn in_memory() -> Self {
        use crate::storage::InMemoryStore;

        Self::new(
            Arc::new(InMemoryStore::<Movie>::new()),
            Arc::new(InMemoryStore::<Director>::new()),
        )
    }
}
