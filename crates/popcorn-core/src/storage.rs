//! Persistent watched-movie list.
//!
//! The list is stored as a single JSON array. Every mutation rewrites the
//! whole file; loading is fail-soft so a missing or corrupt file never
//! prevents startup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PopcornError;
use crate::models::{SummaryStats, WatchedMovie};

/// Ordered, persisted collection of watched movies.
pub struct WatchedStore {
    path: PathBuf,
    movies: Vec<WatchedMovie>,
}

impl WatchedStore {
    /// Open the store backed by the given file, loading any existing list.
    ///
    /// A missing or unreadable file yields an empty list.
    pub fn open(path: PathBuf) -> Self {
        let movies = load_movies(&path);
        Self { path, movies }
    }

    /// The watched list in insertion order.
    pub fn movies(&self) -> &[WatchedMovie] {
        &self.movies
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }

    /// The user's rating for a movie, if it is on the list.
    pub fn user_rating(&self, imdb_id: &str) -> Option<u8> {
        self.movies
            .iter()
            .find(|m| m.imdb_id == imdb_id)
            .map(|m| m.user_rating)
    }

    /// Append a movie to the list and persist.
    ///
    /// Returns `false` without writing when the movie is already present.
    pub fn add(&mut self, movie: WatchedMovie) -> Result<bool, PopcornError> {
        if self.contains(&movie.imdb_id) {
            tracing::debug!(imdb_id = %movie.imdb_id, "already on watched list");
            return Ok(false);
        }
        self.movies.push(movie);
        self.persist()?;
        Ok(true)
    }

    /// Remove a movie from the list and persist.
    ///
    /// Returns `false` without writing when the movie was not present.
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool, PopcornError> {
        let before = self.movies.len();
        self.movies.retain(|m| m.imdb_id != imdb_id);
        if self.movies.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn summarize(&self) -> SummaryStats {
        SummaryStats::compute(&self.movies)
    }

    fn persist(&self) -> Result<(), PopcornError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.movies)?;
        // Write to a sibling temp file first so a failed write can't
        // truncate the existing list.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Load the watched list from disk, falling back to empty on any failure.
fn load_movies(path: &Path) -> Vec<WatchedMovie> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read watched list");
            return Vec::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(movies) => movies,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed watched list, starting empty");
            Vec::new()
        }
    }
}
