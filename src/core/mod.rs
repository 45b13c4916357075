//! Core module containing the entity and store abstractions

pub mod entity;
pub mod error;
pub mod service;

pub use entity::{Entity, EntityPatch};
pub use error::StoreError;
pub use service::{EntityStore, StoreResult};
