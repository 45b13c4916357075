//! GraphQL schema and query root
//!
//! The schema is built once per process from a `ServerHost` and shared
//! read-only afterwards; cloning a `CinemaSchema` is cheap.

use super::mutation::MutationRoot;
use super::store_error;
use super::types::{Director, Movie};
use crate::server::host::ServerHost;
use async_graphql::{Context, EmptySubscription, ID, Object, Result, Schema};
use std::sync::Arc;

/// GraphQL schema type
pub type CinemaSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create the GraphQL schema with `host` available to every resolver
pub fn build_schema(host: Arc<ServerHost>) -> CinemaSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(host)
        .finish()
}

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a movie by ID; null when `id` is omitted or unknown
    async fn movie(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let host = ctx.data::<Arc<ServerHost>>()?;
        let movie = host.movies.get(&id).await.map_err(store_error)?;

        Ok(movie.map(Movie))
    }

    /// Get a director by ID; null when `id` is omitted or unknown
    async fn director(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Director>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let host = ctx.data::<Arc<ServerHost>>()?;
        let director = host.directors.get(&id).await.map_err(store_error)?;

        Ok(director.map(Director))
    }

    /// List every movie
    async fn movies(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        let movies = host.movies.list().await.map_err(store_error)?;

        Ok(Some(movies.into_iter().map(Movie).collect()))
    }

    /// List every director
    async fn directors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Director>>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        let directors = host.directors.list().await.map_err(store_error)?;

        Ok(Some(directors.into_iter().map(Director).collect()))
    }
}
