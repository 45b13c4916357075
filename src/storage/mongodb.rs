//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoStore<E>`, an [`EntityStore`] backed by a MongoDB database
//! via `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! cinema-graph = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! MongoDB uses a **collection-per-entity-type** pattern. Each `MongoStore<E>`
//! operates on a collection named after `E::resource_name()` ("movies",
//! "directors").
//!
//! Identifiers are MongoDB `ObjectId`s generated client-side on insert and
//! exposed as their 24-character hex string. The domain `id` field is mapped
//! to MongoDB's `_id` convention. A string that does not parse as an
//! `ObjectId` is rejected with [`StoreError::InvalidId`] before any round trip.

use crate::core::{Entity, EntityPatch, EntityStore, StoreError, StoreResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Database};

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Parse a domain identifier into an `ObjectId`.
fn parse_object_id(collection: &'static str, id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId {
        collection,
        id: id.to_string(),
    })
}

/// Convert a patch into a BSON document holding only its set fields.
fn patch_to_document<P: serde::Serialize>(
    collection: &'static str,
    patch: &P,
) -> StoreResult<Document> {
    mongodb::bson::to_document(patch).map_err(|e| StoreError::Serialization {
        collection,
        message: e.to_string(),
    })
}

/// Convert a stored document back into an entity,
/// renaming `_id` → `id` and rendering an `ObjectId` as hex.
fn document_to_entity<E: Entity>(mut doc: Document) -> StoreResult<E> {
    if let Some(id) = doc.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => Bson::String(oid.to_hex()),
            other => other,
        };
        doc.insert("id", id);
    }

    // Mongoose-style version key, not part of the entity
    doc.remove("__v");

    mongodb::bson::from_document(doc).map_err(|e| StoreError::Serialization {
        collection: E::resource_name(),
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// MongoStore<E>
// ---------------------------------------------------------------------------

/// Generic entity store backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use cinema::entities::Director;
/// use cinema::storage::MongoStore;
///
/// let db = cinema::storage::mongodb::connect("mongodb://localhost:27017", "cinema").await?;
/// let store = MongoStore::<Director>::new(db);
/// let director = store.insert(patch).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoStore<E> {
    database: Database,
    _marker: std::marker::PhantomData<E>,
}

impl<E> MongoStore<E> {
    /// Create a new `MongoStore` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl<E: Entity> MongoStore<E> {
    /// Get the MongoDB collection for this entity type.
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(E::resource_name())
    }
}

/// Connect to MongoDB and return a handle on `database`.
///
/// Issues a `ping` so an unreachable server fails at startup rather than on
/// the first request.
pub async fn connect(uri: &str, database: &str) -> StoreResult<Database> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|e| StoreError::Connection {
            backend: "mongodb",
            message: e.to_string(),
        })?;

    let db = client.database(database);
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::Connection {
            backend: "mongodb",
            message: e.to_string(),
        })?;

    tracing::info!(database = %database, "Connected to MongoDB");

    Ok(db)
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MongoStore<E> {
    /// Fetch an entity by its hex ObjectId.
    async fn get(&self, id: &str) -> StoreResult<Option<E>> {
        let oid = parse_object_id(E::resource_name(), id)?;

        let doc = self
            .collection()
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::read(E::resource_name(), e))?;

        doc.map(document_to_entity::<E>).transpose()
    }

    /// List all entities in natural order.
    async fn list(&self) -> StoreResult<Vec<E>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| StoreError::read(E::resource_name(), e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::read(E::resource_name(), e))?;

        docs.into_iter().map(document_to_entity::<E>).collect()
    }

    /// Insert a new document; the ObjectId is generated client-side.
    async fn insert(&self, fields: E::Patch) -> StoreResult<E> {
        let oid = ObjectId::new();
        let mut doc = patch_to_document(E::resource_name(), &fields)?;
        doc.insert("_id", oid);

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| StoreError::write(E::resource_name(), e))?;

        tracing::debug!(collection = E::resource_name(), id = %oid, "Document inserted");

        Ok(fields.into_entity(oid.to_hex()))
    }

    /// Apply the patch with `$set` and return the document after the update.
    ///
    /// An empty patch is a plain lookup.
    async fn update(&self, id: &str, patch: E::Patch) -> StoreResult<Option<E>> {
        let oid = parse_object_id(E::resource_name(), id)?;

        if patch.is_empty() {
            return self.get(id).await;
        }

        let changes = patch_to_document(E::resource_name(), &patch)?;
        let doc = self
            .collection()
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| StoreError::write(E::resource_name(), e))?;

        doc.map(document_to_entity::<E>).transpose()
    }

    /// Delete a document and return it as it was before removal.
    async fn delete(&self, id: &str) -> StoreResult<Option<E>> {
        let oid = parse_object_id(E::resource_name(), id)?;

        let doc = self
            .collection()
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::write(E::resource_name(), e))?;

        doc.map(document_to_entity::<E>).transpose()
    }

    /// Find documents whose `field` equals the string `value`.
    async fn find_by(&self, field: &str, value: &str) -> StoreResult<Vec<E>> {
        let cursor = self
            .collection()
            .find(doc! { field: value })
            .await
            .map_err(|e| StoreError::read(E::resource_name(), e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::read(E::resource_name(), e))?;

        docs.into_iter().map(document_to_entity::<E>).collect()
    }
}
