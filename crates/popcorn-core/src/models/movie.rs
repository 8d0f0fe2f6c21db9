use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use popcorn_api::traits::MovieDetails;

use crate::error::PopcornError;

/// A movie the user has watched and rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Runtime in whole minutes, parsed from the provider's free-text field.
    pub runtime_minutes: u32,
    /// Provider rating on a 0-10 scale; 0.0 when the provider had none.
    pub imdb_rating: f32,
    /// The user's own rating, 1-10.
    pub user_rating: u8,
    pub added_at: DateTime<Utc>,
}

impl WatchedMovie {
    /// Build a watched entry from catalog details and the user's rating.
    ///
    /// The rating is clamped to 1-10. Fails if the provider's runtime text
    /// has no leading numeric token (e.g. "N/A").
    pub fn from_details(details: &MovieDetails, user_rating: u8) -> Result<Self, PopcornError> {
        let runtime_minutes = parse_runtime_minutes(&details.runtime)
            .ok_or_else(|| PopcornError::InvalidRuntime(details.runtime.clone()))?;

        Ok(Self {
            imdb_id: details.imdb_id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            poster_url: details.poster_url.clone(),
            runtime_minutes,
            imdb_rating: details.imdb_rating.parse().unwrap_or(0.0),
            user_rating: user_rating.clamp(1, 10),
            added_at: Utc::now(),
        })
    }
}

/// Parse the leading numeric token out of a runtime string like "142 min".
pub fn parse_runtime_minutes(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> MovieDetails {
        MovieDetails {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster_url: "https://example.com/matrix.jpg".to_string(),
            runtime: "136 min".to_string(),
            imdb_rating: "8.7".to_string(),
            actors: "Keanu Reeves, Laurence Fishburne".to_string(),
            plot: "A hacker learns the truth.".to_string(),
            released: "31 Mar 1999".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            genre: "Action, Sci-Fi".to_string(),
        }
    }

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("142 min"), Some(142));
        assert_eq!(parse_runtime_minutes("90"), Some(90));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }

    #[test]
    fn test_from_details() {
        let movie = WatchedMovie::from_details(&details(), 9).unwrap();
        assert_eq!(movie.imdb_id, "tt0133093");
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.runtime_minutes, 136);
        assert_eq!(movie.imdb_rating, 8.7);
        assert_eq!(movie.user_rating, 9);
    }

    #[test]
    fn test_from_details_clamps_rating() {
        let movie = WatchedMovie::from_details(&details(), 0).unwrap();
        assert_eq!(movie.user_rating, 1);
        let movie = WatchedMovie::from_details(&details(), 42).unwrap();
        assert_eq!(movie.user_rating, 10);
    }

    #[test]
    fn test_from_details_rejects_missing_runtime() {
        let mut d = details();
        d.runtime = "N/A".to_string();
        assert!(matches!(
            WatchedMovie::from_details(&d, 5),
            Err(PopcornError::InvalidRuntime(_))
        ));
    }

    #[test]
    fn test_from_details_missing_imdb_rating_defaults_to_zero() {
        let mut d = details();
        d.imdb_rating = "N/A".to_string();
        let movie = WatchedMovie::from_details(&d, 5).unwrap();
        assert_eq!(movie.imdb_rating, 0.0);
    }
}
