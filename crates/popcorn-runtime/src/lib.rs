//! Application runtime wiring the catalog client, search sessions, and the
//! watched-movie store together.

mod session;
mod store;

use std::sync::Arc;

use popcorn_api::error::CatalogError;
use popcorn_api::traits::{MovieCatalog, MovieDetails};
use popcorn_api::OmdbClient;
use popcorn_core::config::AppConfig;
use popcorn_core::error::PopcornError;
use popcorn_core::models::{SummaryStats, WatchedMovie};

pub use session::{SearchSession, SearchState, FETCH_FAILED, MOVIE_NOT_FOUND};
pub use store::StoreHandle;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("store error: {0}")]
    Store(#[from] PopcornError),
}

pub struct Runtime<C = OmdbClient> {
    catalog: Arc<C>,
    store: StoreHandle,
    config: AppConfig,
}

impl Runtime<OmdbClient> {
    /// Build the runtime from the app config.
    pub fn new(config: AppConfig) -> Result<Self, RuntimeError> {
        let catalog = OmdbClient::new(config.omdb())?;
        Self::with_catalog(catalog, config)
    }
}

impl<C> Runtime<C>
where
    C: MovieCatalog + 'static,
{
    /// Build the runtime around an arbitrary catalog implementation.
    pub fn with_catalog(catalog: C, config: AppConfig) -> Result<Self, RuntimeError> {
        let path = config
            .watched_path()
            .ok_or_else(|| RuntimeError::Config("no data directory available".into()))?;
        let store = StoreHandle::open(path)
            .ok_or_else(|| RuntimeError::Config("failed to open watched store".into()))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            store,
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Start a new search session against the catalog.
    pub fn search_session(&self) -> SearchSession<C> {
        SearchSession::new(Arc::clone(&self.catalog), self.config.search.min_query_chars)
    }

    /// Fetch full details for one movie.
    pub async fn get_movie(&self, imdb_id: &str) -> Result<MovieDetails, RuntimeError> {
        Ok(self.catalog.get_movie(imdb_id).await?)
    }

    /// Rate a movie and add it to the watched list.
    ///
    /// Returns `false` when the movie was already on the list.
    pub async fn rate(&self, details: &MovieDetails, rating: u8) -> Result<bool, RuntimeError> {
        let movie = WatchedMovie::from_details(details, rating)?;
        Ok(self.store.add(movie).await?)
    }

    /// Remove a movie from the watched list.
    pub async fn remove_watched(&self, imdb_id: &str) -> Result<bool, RuntimeError> {
        Ok(self.store.remove(imdb_id).await?)
    }

    pub async fn watched(&self) -> Vec<WatchedMovie> {
        self.store.list().await
    }

    pub async fn summary(&self) -> SummaryStats {
        self.store.summarize().await
    }

    /// The user's own rating for a movie, if already watched.
    pub async fn user_rating(&self, imdb_id: &str) -> Option<u8> {
        self.store.user_rating(imdb_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use popcorn_api::traits::MovieSummary;

    struct StaticCatalog;

    impl MovieCatalog for StaticCatalog {
        async fn search_movies(&self, _query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
            Ok(vec![])
        }

        async fn get_movie(&self, imdb_id: &str) -> Result<MovieDetails, CatalogError> {
            if imdb_id != "tt0133093" {
                return Err(CatalogError::NotFound);
            }
            Ok(MovieDetails {
                imdb_id: "tt0133093".to_string(),
                title: "The Matrix".to_string(),
                year: "1999".to_string(),
                poster_url: String::new(),
                runtime: "136 min".to_string(),
                imdb_rating: "8.7".to_string(),
                actors: String::new(),
                plot: String::new(),
                released: String::new(),
                director: String::new(),
                genre: String::new(),
            })
        }
    }

    fn test_config(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.watched_path = Some(dir.join("watched.json"));
        config
    }

    #[tokio::test]
    async fn test_rate_and_summarize() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Runtime::with_catalog(StaticCatalog, test_config(dir.path())).unwrap();

        let details = runtime.get_movie("tt0133093").await.unwrap();
        assert!(runtime.rate(&details, 9).await.unwrap());
        assert!(!runtime.rate(&details, 3).await.unwrap());

        assert_eq!(runtime.user_rating("tt0133093").await, Some(9));

        let stats = runtime.summary().await;
        assert_eq!(stats.count, 1);
        assert_eq!(stats.avg_runtime, 136.0);

        assert!(runtime.remove_watched("tt0133093").await.unwrap());
        assert_eq!(runtime.summary().await.count, 0);
    }

    #[tokio::test]
    async fn test_unknown_movie_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Runtime::with_catalog(StaticCatalog, test_config(dir.path())).unwrap();

        let err = runtime.get_movie("tt9999999").await.unwrap_err();
        assert!(matches!(err, RuntimeError::Catalog(CatalogError::NotFound)));
    }
}
