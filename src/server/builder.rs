//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::{AppConfig, StorageBackend, StorageConfig};
use crate::core::EntityStore;
use crate::entities::{Director, Movie};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_in_memory_stores()
///     .with_playground(true)
///     .build()?;
/// ```
pub struct ServerBuilder {
    movies: Option<Arc<dyn EntityStore<Movie>>>,
    directors: Option<Arc<dyn EntityStore<Director>>>,
    playground: bool,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            movies: None,
            directors: None,
            playground: false,
            custom_routes: Vec::new(),
        }
    }

    /// Create a builder from the application configuration
    ///
    /// Connects to the configured store; with the `mongodb` backend this
    /// fails if the server is unreachable.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new()
            .with_playground(config.graphql.playground)
            .with_storage(&config.storage)
            .await
    }

    /// Set the movie store (required)
    pub fn with_movie_store(mut self, store: impl EntityStore<Movie> + 'static) -> Self {
        self.movies = Some(Arc::new(store));
        self
    }

    /// Set the director store (required)
    pub fn with_director_store(mut self, store: impl EntityStore<Director> + 'static) -> Self {
        self.directors = Some(Arc::new(store));
        self
    }

    /// Use fresh in-memory stores for both collections
    #[cfg(feature = "in-memory")]
    pub fn with_in_memory_stores(self) -> Self {
        use crate::storage::InMemoryStore;

        self.with_movie_store(InMemoryStore::<Movie>::new())
            .with_director_store(InMemoryStore::<Director>::new())
    }

    /// Set both stores from a storage configuration
    pub async fn with_storage(self, config: &StorageConfig) -> Result<Self> {
        match config.backend {
            #[cfg(feature = "in-memory")]
            StorageBackend::InMemory => {
                tracing::info!("Using in-memory storage");
                Ok(self.with_in_memory_stores())
            }
            #[cfg(not(feature = "in-memory"))]
            StorageBackend::InMemory => anyhow::bail!(
                "In-memory storage is not enabled. Enable the 'in-memory' feature."
            ),
            #[cfg(feature = "mongodb_backend")]
            StorageBackend::Mongodb => {
                use crate::storage::MongoStore;

                let db = crate::storage::mongodb::connect(&config.uri, &config.database).await?;
                Ok(self
                    .with_movie_store(MongoStore::<Movie>::new(db.clone()))
                    .with_director_store(MongoStore::<Director>::new(db)))
            }
            #[cfg(not(feature = "mongodb_backend"))]
            StorageBackend::Mongodb => anyhow::bail!(
                "MongoDB storage is not enabled. Enable the 'mongodb_backend' feature."
            ),
        }
    }

    /// Serve the Playground UI on `GET /graphql`
    pub fn with_playground(mut self, enabled: bool) -> Self {
        self.playground = enabled;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(&mut self) -> Result<ServerHost> {
        let movies = self
            .movies
            .take()
            .ok_or_else(|| anyhow::anyhow!("Movie store is required. Call .with_movie_store()"))?;

        let directors = self.directors.take().ok_or_else(|| {
            anyhow::anyhow!("Director store is required. Call .with_director_store()")
        })?;

        Ok(ServerHost::new(movies, directors))
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health check routes
    /// - GraphQL routes
    /// - Custom routes
    pub fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);

        let mut app = RestExposure::health_routes()
            .merge(GraphQLExposure::build_router(host, self.playground));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
