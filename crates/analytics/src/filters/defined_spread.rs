//! Drops movies whose sample standard deviation is undefined.
//!
//! Only reachable when a count threshold below 2 lets single-rating
//! movies through.

use crate::error::Result;
use crate::stats::MovieAggregate;
use crate::traits::AggregateFilter;

pub struct DefinedSpreadFilter;

impl AggregateFilter for DefinedSpreadFilter {
    fn name(&self) -> &str {
        "DefinedSpreadFilter"
    }

    fn apply(&self, aggregates: Vec<MovieAggregate>) -> Result<Vec<MovieAggregate>> {
        Ok(aggregates
            .into_iter()
            .filter(|agg| agg.stddev.is_some())
            .collect())
    }
}
