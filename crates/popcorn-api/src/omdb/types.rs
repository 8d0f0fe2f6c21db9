//! OMDb wire types.
//!
//! OMDb signals success in-band: every response carries a `Response` field
//! holding the string `"True"` or `"False"` alongside an optional `Error`
//! message, regardless of HTTP status.

use serde::Deserialize;

use crate::traits::{MovieDetails, MovieSummary};

/// Envelope for the search endpoint (`?s=<query>`).
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    /// True when the provider reports a non-empty match set.
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl OmdbSearchItem {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: self.poster,
        }
    }
}

/// Record returned by the detail endpoint (`?i=<imdb_id>`).
///
/// Fields default to empty strings: OMDb omits most of them on a
/// `Response: "False"` answer.
#[derive(Debug, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
}

impl OmdbDetailResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    pub fn into_details(self) -> MovieDetails {
        MovieDetails {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster_url: self.poster,
            runtime: self.runtime,
            imdb_rating: self.imdb_rating,
            actors: self.actors,
            plot: self.plot,
            released: self.released,
            director: self.director,
            genre: self.genre,
        }
    }
}
