//! Vote-count threshold.
//!
//! Removes movies with too few ratings for their average to be meaningful.

use crate::error::Result;
use crate::stats::MovieAggregate;
use crate::traits::AggregateFilter;

/// Keeps aggregates whose rating count is at least `min_count`.
pub struct MinimumCountFilter {
    min_count: u64,
}

impl MinimumCountFilter {
    /// # Arguments
    /// * `min_count` - Minimum number of ratings (inclusive), typically 50
    pub fn new(min_count: u64) -> Self {
        Self { min_count }
    }
}

impl AggregateFilter for MinimumCountFilter {
    fn name(&self) -> &str {
        "MinimumCountFilter"
    }

    fn apply(&self, aggregates: Vec<MovieAggregate>) -> Result<Vec<MovieAggregate>> {
        Ok(aggregates
            .into_iter()
            .filter(|agg| agg.count >= self.min_count)
            .collect())
    }
}
