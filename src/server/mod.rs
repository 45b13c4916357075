//! Server module for hosting the GraphQL API over HTTP
//!
//! This module provides a `ServerBuilder` that wires the entity stores into a
//! `ServerHost` and mounts:
//! - the GraphQL endpoint (`/graphql`, `/graphql/schema`)
//! - health check routes (`/health`, `/healthz`)

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
