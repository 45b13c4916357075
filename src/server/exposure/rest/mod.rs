//! REST routes served next to the GraphQL endpoint
//!
//! Only health checks live here; all entity operations go through GraphQL.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// REST exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build health check routes
    pub fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }))
    }
}
