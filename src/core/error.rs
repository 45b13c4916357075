//! Typed errors raised by the store layer
//!
//! Not-found is never an error here: lookups, updates and deletes against an
//! unknown identifier return `Ok(None)`. A [`StoreError`] means the backend
//! failed or rejected the request, including an identifier it cannot parse.

use thiserror::Error;

/// Errors returned by [`EntityStore`](crate::core::EntityStore) implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached
    #[error("{backend} connection error: {message}")]
    Connection {
        backend: &'static str,
        message: String,
    },

    /// A read (find, list) failed
    #[error("Failed to read from {collection}: {message}")]
    Read {
        collection: &'static str,
        message: String,
    },

    /// A write (insert, update, delete) failed
    #[error("Failed to write to {collection}: {message}")]
    Write {
        collection: &'static str,
        message: String,
    },

    /// A stored document could not be converted to or from an entity
    #[error("Failed to convert {collection} document: {message}")]
    Serialization {
        collection: &'static str,
        message: String,
    },

    /// The identifier is not well-formed for this backend
    #[error("Invalid {collection} id \"{id}\"")]
    InvalidId { collection: &'static str, id: String },

    /// Internal store failure (e.g., poisoned lock)
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get the error code exposed to API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Connection { .. } => "STORE_UNAVAILABLE",
            StoreError::Read { .. } => "STORE_READ_ERROR",
            StoreError::Write { .. } => "STORE_WRITE_ERROR",
            StoreError::Serialization { .. } => "STORE_SERIALIZATION_ERROR",
            StoreError::InvalidId { .. } => "INVALID_ID",
            StoreError::Internal(_) => "STORE_INTERNAL_ERROR",
        }
    }

    /// Shorthand for a write failure
    pub fn write(collection: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Write {
            collection,
            message: err.to_string(),
        }
    }

    /// Shorthand for a read failure
    pub fn read(collection: &'static str, err: impl std::fmt::Display) -> Self {
        StoreError::Read {
            collection,
            message: err.to_string(),
        }
    }
}
