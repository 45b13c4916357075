//! GraphQL API exposure
//!
//! This module provides the GraphQL schema (query and mutation roots, object
//! types) and the Axum routes serving it:
//! - `POST /graphql` executes a query or mutation document
//! - `GET /graphql` serves the Playground UI when enabled
//! - `GET /graphql/schema` returns the schema as SDL

mod mutation;
mod schema;
mod types;

pub use mutation::MutationRoot;
pub use schema::{CinemaSchema, QueryRoot, build_schema};
pub use types::{Director, Movie};

use crate::core::StoreError;
use crate::server::host::ServerHost;
use async_graphql::ErrorExtensions;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.error_code()))
    }
}

/// Convert a store failure into a resolver error, message unchanged
pub(crate) fn store_error(err: StoreError) -> async_graphql::Error {
    tracing::warn!(error = %err, "Store operation failed");
    err.extend()
}

/// GraphQL API exposure implementation
///
/// Builds the schema once from the host and mounts it on an Axum router.
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host holding the entity stores
    /// * `playground` - Serve the Playground UI on `GET /graphql`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = Arc::new(ServerHost::in_memory());
    /// let graphql_app = GraphQLExposure::build_router(host, true);
    /// ```
    pub fn build_router(host: Arc<ServerHost>, playground: bool) -> Router {
        Self::router_for_schema(build_schema(host), playground)
    }

    /// Mount an already built schema
    pub fn router_for_schema(schema: CinemaSchema, playground: bool) -> Router {
        let endpoint = if playground {
            post(graphql_handler).get(graphql_playground)
        } else {
            post(graphql_handler)
        };

        Router::new()
            .route("/graphql", endpoint)
            .route("/graphql/schema", get(graphql_sdl))
            .with_state(schema)
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    State(schema): State<CinemaSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Handler for GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(State(schema): State<CinemaSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
