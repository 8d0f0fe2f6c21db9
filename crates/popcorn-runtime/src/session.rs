//! Live search against the movie catalog.
//!
//! Each query edit cancels the in-flight lookup before starting a new one,
//! so results from an abandoned query can never land after a newer one.
//! Queries shorter than the configured minimum clear the results without
//! touching the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::{AbortHandle, Abortable};
use tokio::sync::watch;

use popcorn_api::error::CatalogError;
use popcorn_api::traits::{MovieCatalog, MovieSummary};

pub const FETCH_FAILED: &str = "Fail to fetch movies!";
pub const MOVIE_NOT_FOUND: &str = "Movie Not Found!";

/// Snapshot of the search results.
///
/// Exactly one of the three is meaningful at a time: a loading flag, an
/// error message, or the result list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<MovieSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Handle to an in-flight lookup.
struct Lookup {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl Lookup {
    fn cancel(&self) {
        // Set the flag first: a task past its abort point still sees it
        // and refuses to commit.
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }
}

pub struct SearchSession<C> {
    catalog: Arc<C>,
    min_query_chars: usize,
    query: String,
    state: watch::Sender<SearchState>,
    current: Option<Lookup>,
}

impl<C> SearchSession<C>
where
    C: MovieCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, min_query_chars: usize) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            catalog,
            min_query_chars,
            query: String::new(),
            state,
            current: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Update the query, cancelling any in-flight lookup.
    ///
    /// Queries shorter than the minimum reset the state to empty and idle.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();

        let prev = self.current.take();
        let too_short = self.query.chars().count() < self.min_query_chars;

        // Cancel inside the watch closure so no stale commit can slip in
        // between the cancel and the state update.
        self.state.send_modify(|state| {
            if let Some(prev) = &prev {
                prev.cancel();
            }
            if too_short {
                state.results.clear();
                state.is_loading = false;
                state.error = None;
            } else {
                state.is_loading = true;
                state.error = None;
            }
        });

        if !too_short {
            self.current = Some(self.spawn_lookup(self.query.clone()));
        }
    }

    fn spawn_lookup(&self, query: String) -> Lookup {
        let (abort, registration) = AbortHandle::new_pair();
        let cancelled = Arc::new(AtomicBool::new(false));

        let catalog = Arc::clone(&self.catalog);
        let state = self.state.clone();
        let flag = Arc::clone(&cancelled);

        let task = async move {
            let result = catalog.search_movies(&query).await;

            // Commit under the watch lock, but only if this lookup is
            // still the current one.
            state.send_if_modified(|s| {
                if flag.load(Ordering::SeqCst) {
                    return false;
                }
                s.is_loading = false;
                match result {
                    Ok(results) => {
                        s.results = results;
                        s.error = None;
                    }
                    Err(CatalogError::NotFound) => {
                        s.results.clear();
                        s.error = Some(MOVIE_NOT_FOUND.to_string());
                    }
                    Err(e) => {
                        tracing::warn!(query, error = %e, "movie search failed");
                        s.results.clear();
                        s.error = Some(FETCH_FAILED.to_string());
                    }
                }
                true
            });
        };

        tokio::spawn(Abortable::new(task, registration));

        Lookup { abort, cancelled }
    }
}

impl<C> Drop for SearchSession<C> {
    fn drop(&mut self) {
        if let Some(lookup) = self.current.take() {
            // Cancel under the watch lock; the task can then no longer
            // publish to any remaining subscribers.
            self.state.send_if_modified(|_| {
                lookup.cancel();
                false
            });
        }
    }
}
