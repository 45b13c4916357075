//! Store trait for entity collections

use crate::core::entity::Entity;
use crate::core::error::StoreError;
use async_trait::async_trait;

/// Result type returned by every store operation
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Store trait for one collection of entities
///
/// Implementations provide point lookup, full listing, insertion, partial
/// update and deletion for a single entity type. Absence of an identifier is
/// reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Get an entity by ID
    async fn get(&self, id: &str) -> StoreResult<Option<E>>;

    /// List all entities, in store-defined order
    async fn list(&self) -> StoreResult<Vec<E>>;

    /// Insert a new entity built from `fields`; the store assigns the ID
    async fn insert(&self, fields: E::Patch) -> StoreResult<E>;

    /// Apply the set fields of `patch` and return the entity after the update
    async fn update(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>>;

    /// Remove an entity and return it as it was before removal
    async fn delete(&self, id: &str) -> StoreResult<Option<E>>;

    /// Find entities whose string field `field` equals `value`
    async fn find_by(&self, field: &str, value: &str) -> StoreResult<Vec<E>>;
}
