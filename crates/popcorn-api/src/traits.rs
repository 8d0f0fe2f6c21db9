//! Trait definitions for movie catalog providers.
//!
//! The search session and runtime are written against [`MovieCatalog`],
//! so tests can substitute a scripted catalog for the real client.

use std::future::Future;

use crate::error::CatalogError;

/// A remote movie database queried by title or id.
pub trait MovieCatalog: Send + Sync {
    /// Search for movies by title.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, CatalogError>> + Send;

    /// Fetch the full detail record for a single movie.
    fn get_movie(
        &self,
        imdb_id: &str,
    ) -> impl Future<Output = Result<MovieDetails, CatalogError>> + Send;
}

/// One row of a search result, as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full detail record for a selected movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Free-text runtime as returned by the provider, e.g. "142 min".
    pub runtime: String,
    /// Critic rating as returned by the provider, e.g. "8.7" or "N/A".
    pub imdb_rating: String,
    pub actors: String,
    pub plot: String,
    pub released: String,
    pub director: String,
    pub genre: String,
}
