use serde::{Deserialize, Serialize};

use super::movie::WatchedMovie;

/// Aggregate statistics over the watched list.
///
/// All averages are 0 when the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

impl SummaryStats {
    pub fn compute(movies: &[WatchedMovie]) -> Self {
        if movies.is_empty() {
            return Self::default();
        }

        let count = movies.len();
        let n = count as f64;
        Self {
            count,
            avg_imdb_rating: movies.iter().map(|m| f64::from(m.imdb_rating)).sum::<f64>() / n,
            avg_user_rating: movies.iter().map(|m| f64::from(m.user_rating)).sum::<f64>() / n,
            avg_runtime: movies
                .iter()
                .map(|m| f64::from(m.runtime_minutes))
                .sum::<f64>()
                / n,
        }
    }
}
