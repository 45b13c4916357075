//! GraphQL mutations for adding, updating and deleting movies and directors
//!
//! `add*` store every argument that was supplied, as given. `update*` only
//! apply arguments that are present *and truthy*: an empty string or `0` is
//! treated exactly like an omitted argument and leaves the stored field
//! unchanged. Clients relying on this cannot clear a name or set an age to 0
//! through `update*`.

use super::store_error;
use super::types::{Director, Movie};
use crate::entities::{DirectorPatch, MoviePatch};
use crate::server::host::ServerHost;
use async_graphql::{Context, ID, Object, Result};
use std::sync::Arc;

/// Truthiness of a scalar argument, as applied by `update*`
trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for ID {
    fn is_truthy(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

/// Keep `value` only if it is present and truthy
fn truthy<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}

/// Root mutation type for GraphQL
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a movie from the supplied fields
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        genre: Option<String>,
        director_id: Option<ID>,
    ) -> Result<Option<Movie>> {
        let host = ctx.data::<Arc<ServerHost>>()?;

        let fields = MoviePatch {
            name,
            genre,
            director_id: director_id.map(|id| id.0),
        };
        let movie = host.movies.insert(fields).await.map_err(store_error)?;

        tracing::info!(id = %movie.id, "Movie added");
        Ok(Some(Movie(movie)))
    }

    /// Create a director from the supplied fields
    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        age: Option<i32>,
    ) -> Result<Option<Director>> {
        let host = ctx.data::<Arc<ServerHost>>()?;

        let director = host
            .directors
            .insert(DirectorPatch { name, age })
            .await
            .map_err(store_error)?;

        tracing::info!(id = %director.id, "Director added");
        Ok(Some(Director(director)))
    }

    /// Update the truthy supplied fields of a director
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        age: Option<i32>,
    ) -> Result<Option<Director>> {
        let host = ctx.data::<Arc<ServerHost>>()?;

        let patch = DirectorPatch {
            name: truthy(name),
            age: truthy(age),
        };
        let director = host
            .directors
            .update(&id, patch)
            .await
            .map_err(store_error)?;

        tracing::debug!(id = %id.0, found = director.is_some(), "Director update");
        Ok(director.map(Director))
    }

    /// Update the truthy supplied fields of a movie
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        genre: Option<String>,
        director_id: Option<ID>,
    ) -> Result<Option<Movie>> {
        let host = ctx.data::<Arc<ServerHost>>()?;

        let patch = MoviePatch {
            name: truthy(name),
            genre: truthy(genre),
            director_id: truthy(director_id).map(|id| id.0),
        };
        let movie = host.movies.update(&id, patch).await.map_err(store_error)?;

        tracing::debug!(id = %id.0, found = movie.is_some(), "Movie update");
        Ok(movie.map(Movie))
    }

    /// Delete a movie, returning it as it was before removal
    async fn delete_movie(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Movie>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        let movie = host.movies.delete(&id).await.map_err(store_error)?;

        tracing::debug!(id = %id.0, found = movie.is_some(), "Movie delete");
        Ok(movie.map(Movie))
    }

    /// Delete a director, returning it as it was before removal
    ///
    /// Movies referencing the director are left as they are.
    async fn delete_director(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Director>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        let director = host.directors.delete(&id).await.map_err(store_error)?;

        tracing::debug!(id = %id.0, found = director.is_some(), "Director delete");
        Ok(director.map(Director))
    }
}
