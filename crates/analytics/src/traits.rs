//! Core traits for the threshold filtering stage.
//!
//! Per-movie aggregates pass through a chain of `AggregateFilter`s before
//! a query ranks them, so thresholds compose instead of being hard-coded
//! into each query.

use crate::error::Result;
use crate::stats::MovieAggregate;

/// A predicate stage over per-movie aggregates.
///
/// ## Design Note
/// - `Send + Sync` lets a pipeline live inside a shared engine
/// - Filters take ownership of the Vec and return the retained rows,
///   so no aggregate is cloned
pub trait AggregateFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of aggregates.
    ///
    /// # Returns
    /// * `Ok(Vec<MovieAggregate>)` - The retained aggregates, order preserved
    /// * `Err` - If filtering fails
    fn apply(&self, aggregates: Vec<MovieAggregate>) -> Result<Vec<MovieAggregate>>;
}
