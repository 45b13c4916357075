//! Entity traits defining the core abstraction for stored documents

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for every document kept by an [`EntityStore`](crate::core::EntityStore).
///
/// An entity is a flat record with a store-assigned string identifier and a
/// set of optional fields. Creation and partial updates both go through the
/// entity's [`Patch`](Entity::Patch) type, which carries only the fields a
/// caller actually supplied.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Partial field set accepted by `insert` and `update`
    type Patch: EntityPatch<Self>;

    /// Collection name used by the stores (e.g., "movies", "directors")
    fn resource_name() -> &'static str;

    /// Get the store-assigned identifier
    fn id(&self) -> &str;
}

/// A subset of an entity's fields, applied selectively.
///
/// Every field is optional; `None` means "leave unchanged" on update and
/// "not stored" on insert.
pub trait EntityPatch<E>: Clone + Default + Send + Sync + Serialize + 'static {
    /// True when no field is set
    fn is_empty(&self) -> bool;

    /// Overwrite the fields of `entity` that are set in this patch
    fn apply_to(self, entity: &mut E);

    /// Build a full entity from this patch and a freshly assigned identifier
    fn into_entity(self, id: String) -> E;
}
