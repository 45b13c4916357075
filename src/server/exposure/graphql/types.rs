//! GraphQL object types for movies and directors
//!
//! `Movie` and `Director` wrap the stored entities. Besides the stored
//! fields, each type exposes one relationship field resolved through the
//! host's stores: `Movie.director` follows `directorId`, `Director.movies`
//! lists the movies referencing the director.

use super::store_error;
use crate::entities;
use crate::server::host::ServerHost;
use async_graphql::{Context, ID, Object, Result};
use std::sync::Arc;

/// A movie as exposed through GraphQL
pub struct Movie(pub entities::Movie);

/// A director as exposed through GraphQL
pub struct Director(pub entities::Director);

impl From<entities::Movie> for Movie {
    fn from(movie: entities::Movie) -> Self {
        Self(movie)
    }
}

impl From<entities::Director> for Director {
    fn from(director: entities::Director) -> Self {
        Self(director)
    }
}

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn genre(&self) -> Option<&str> {
        self.0.genre.as_deref()
    }

    async fn director_id(&self) -> Option<ID> {
        self.0.director_id.clone().map(ID)
    }

    /// The referenced director, or null if unset or dangling
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        let Some(director_id) = self.0.director_id.as_deref() else {
            return Ok(None);
        };

        let host = ctx.data::<Arc<ServerHost>>()?;
        let director = host.directors.get(director_id).await.map_err(store_error)?;

        Ok(director.map(Director))
    }
}

#[Object]
impl Director {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    /// Movies whose `directorId` is this director
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        let movies = host
            .movies
            .find_by("directorId", &self.0.id)
            .await
            .map_err(store_error)?;

        Ok(movies.into_iter().map(Movie).collect())
    }
}
