//! In-memory implementation of EntityStore for testing and development

use crate::core::{Entity, EntityPatch, EntityStore, StoreError, StoreResult};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory entity store implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and keeps entities in insertion order. Identifiers are UUID v4 strings.
#[derive(Clone)]
pub struct InMemoryStore<E> {
    entities: Arc<RwLock<IndexMap<String, E>>>,
}

impl<E> InMemoryStore<E> {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Internal(format!("Failed to acquire lock: {}", err))
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn get(&self, id: &str) -> StoreResult<Option<E>> {
        let entities = self.entities.read().map_err(lock_error)?;

        Ok(entities.get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<E>> {
        let entities = self.entities.read().map_err(lock_error)?;

        Ok(entities.values().cloned().collect())
    }

    async fn insert(&self, fields: E::Patch) -> StoreResult<E> {
        let id = Uuid::new_v4().to_string();
        let entity = fields.into_entity(id.clone());

        let mut entities = self.entities.write().map_err(lock_error)?;
        entities.insert(id, entity.clone());

        tracing::debug!(collection = E::resource_name(), id = %entity.id(), "Entity inserted");

        Ok(entity)
    }

    async fn update(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>> {
        let mut entities = self.entities.write().map_err(lock_error)?;

        let Some(entity) = entities.get_mut(id) else {
            return Ok(None);
        };

        patch.apply_to(entity);

        Ok(Some(entity.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<E>> {
        let mut entities = self.entities.write().map_err(lock_error)?;

        // shift_remove keeps the remaining entities in insertion order
        Ok(entities.shift_remove(id))
    }

    async fn find_by(&self, field: &str, value: &str) -> StoreResult<Vec<E>> {
        let entities = self.entities.read().map_err(lock_error)?;

        let mut matches = Vec::new();
        for entity in entities.values() {
            let json = serde_json::to_value(entity).map_err(|e| StoreError::Serialization {
                collection: E::resource_name(),
                message: e.to_string(),
            })?;

            if json.get(field).and_then(|v| v.as_str()) == Some(value) {
                matches.push(entity.clone());
            }
        }

        Ok(matches)
    }
}
