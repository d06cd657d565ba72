//! The FilterPipeline chains aggregate filters.

use crate::error::Result;
use crate::stats::MovieAggregate;
use crate::traits::AggregateFilter;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumCountFilter::new(50))
///     .add_filter(DefinedSpreadFilter);
///
/// let qualifying = pipeline.apply(movie_aggregates(ratings))?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn AggregateFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl AggregateFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence, logging the row count around each stage.
    pub fn apply(&self, aggregates: Vec<MovieAggregate>) -> Result<Vec<MovieAggregate>> {
        let mut current = aggregates;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
