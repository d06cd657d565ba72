//! Grouped aggregation over the ratings table.
//!
//! ## Algorithm
//! 1. Bucket rating values by key in a single sequential pass, so each
//!    bucket holds its values in input order
//! 2. Reduce every bucket independently on the rayon pool
//! 3. Sort the reduced groups by key
//!
//! Because a bucket is always summed in the same order, repeated runs over
//! the same input produce bit-identical means and deviations no matter how
//! rayon schedules the buckets.

use data_loader::{MovieId, Rating, UserId};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Count, mean and sample standard deviation of one movie's ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovieAggregate {
    pub movie_id: MovieId,
    pub count: u64,
    pub mean: f64,
    /// `None` when fewer than two ratings exist (sample deviation undefined).
    pub stddev: Option<f64>,
}

impl MovieAggregate {
    /// Reduce a non-empty slice of rating values.
    ///
    /// The deviation uses two passes (mean first, then squared distances),
    /// with an `n - 1` denominator.
    pub fn from_values(movie_id: MovieId, values: &[f64]) -> Self {
        let count = values.len() as u64;
        let mean = mean(values);
        let stddev = if values.len() >= 2 {
            let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Some((squared / (values.len() - 1) as f64).sqrt())
        } else {
            None
        };

        Self {
            movie_id,
            count,
            mean,
            stddev,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-movie aggregates, sorted by movie id.
pub fn movie_aggregates(ratings: &[Rating]) -> Vec<MovieAggregate> {
    let mut buckets: HashMap<MovieId, Vec<f64>> = HashMap::new();
    for rating in ratings {
        buckets
            .entry(rating.movie_id)
            .or_default()
            .push(rating.rating);
    }

    let mut aggregates: Vec<MovieAggregate> = buckets
        .par_iter()
        .map(|(&movie_id, values)| MovieAggregate::from_values(movie_id, values))
        .collect();
    aggregates.sort_unstable_by_key(|a| a.movie_id);
    aggregates
}

/// Count records per key.
pub fn count_by<K, F>(ratings: &[Rating], key: F) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: Fn(&Rating) -> K,
{
    let mut counts: HashMap<K, u64> = HashMap::new();
    for rating in ratings {
        *counts.entry(key(rating)).or_insert(0) += 1;
    }
    counts
}

/// Ratings per user.
pub fn user_counts(ratings: &[Rating]) -> HashMap<UserId, u64> {
    count_by(ratings, |r| r.user_id)
}
