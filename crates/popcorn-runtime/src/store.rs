//! Async facade over the watched-movie store.
//!
//! File IO runs on a dedicated thread; callers talk to it over a command
//! channel so async code never blocks on the filesystem.

use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};

use popcorn_core::error::PopcornError;
use popcorn_core::models::{SummaryStats, WatchedMovie};
use popcorn_core::storage::WatchedStore;

#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<StoreCommand>,
}

enum StoreCommand {
    Add {
        movie: Box<WatchedMovie>,
        reply: oneshot::Sender<Result<bool, PopcornError>>,
    },
    Remove {
        imdb_id: String,
        reply: oneshot::Sender<Result<bool, PopcornError>>,
    },
    List {
        reply: oneshot::Sender<Vec<WatchedMovie>>,
    },
    Summarize {
        reply: oneshot::Sender<SummaryStats>,
    },
    UserRating {
        imdb_id: String,
        reply: oneshot::Sender<Option<u8>>,
    },
}

impl StoreHandle {
    /// Open the store and spawn its worker thread.
    pub fn open(path: PathBuf) -> Option<Self> {
        let store = WatchedStore::open(path);

        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("watched-store".into())
            .spawn(move || actor_loop(store, rx))
            .map_err(|e| tracing::error!("Failed to spawn store thread: {e}"))
            .ok()?;

        Some(Self { tx })
    }

    pub async fn add(&self, movie: WatchedMovie) -> Result<bool, PopcornError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::Add {
            movie: Box::new(movie),
            reply,
        });
        rx.await.unwrap_or_else(|_| Err(closed()))
    }

    pub async fn remove(&self, imdb_id: impl Into<String>) -> Result<bool, PopcornError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::Remove {
            imdb_id: imdb_id.into(),
            reply,
        });
        rx.await.unwrap_or_else(|_| Err(closed()))
    }

    pub async fn list(&self) -> Vec<WatchedMovie> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::List { reply });
        rx.await.unwrap_or_default()
    }

    pub async fn summarize(&self) -> SummaryStats {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::Summarize { reply });
        rx.await.unwrap_or_default()
    }

    pub async fn user_rating(&self, imdb_id: impl Into<String>) -> Option<u8> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::UserRating {
            imdb_id: imdb_id.into(),
            reply,
        });
        rx.await.unwrap_or_default()
    }
}

fn closed() -> PopcornError {
    PopcornError::Config("store actor closed".into())
}

fn actor_loop(mut store: WatchedStore, mut rx: mpsc::UnboundedReceiver<StoreCommand>) {
    while let Some(cmd) = rx.blocking_recv() {
        match cmd {
            StoreCommand::Add { movie, reply } => {
                let _ = reply.send(store.add(*movie));
            }
            StoreCommand::Remove { imdb_id, reply } => {
                let _ = reply.send(store.remove(&imdb_id));
            }
            StoreCommand::List { reply } => {
                let _ = reply.send(store.movies().to_vec());
            }
            StoreCommand::Summarize { reply } => {
                let _ = reply.send(store.summarize());
            }
            StoreCommand::UserRating { imdb_id, reply } => {
                let _ = reply.send(store.user_rating(&imdb_id));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn movie(id: &str, user: u8) -> WatchedMovie {
        WatchedMovie {
            imdb_id: id.to_string(),
            title: format!("Movie {id}"),
            year: "2000".to_string(),
            poster_url: String::new(),
            runtime_minutes: 100,
            imdb_rating: 7.0,
            user_rating: user,
            added_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreHandle::open(dir.path().join("watched.json")).unwrap();

        assert!(store.add(movie("tt1", 8)).await.unwrap());
        assert!(store.add(movie("tt2", 6)).await.unwrap());
        assert!(!store.add(movie("tt1", 2)).await.unwrap());

        let list = store.list().await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].imdb_id, "tt1");

        assert_eq!(store.user_rating("tt1").await, Some(8));
        assert_eq!(store.user_rating("tt9").await, None);

        let stats = store.summarize().await;
        assert_eq!(stats.count, 2);
        assert_eq!(stats.avg_user_rating, 7.0);

        assert!(store.remove("tt1").await.unwrap());
        assert!(!store.remove("tt1").await.unwrap());
        assert_eq!(store.list().await.len(), 1);
    }
}
