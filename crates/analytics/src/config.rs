//! Query configuration.

use serde::{Deserialize, Serialize};

/// Row cap for ranked result tables.
pub const DEFAULT_LIMIT: usize = 10;

/// Default vote threshold for the top-rated table.
pub const DEFAULT_MIN_VOTES: u64 = 50;

/// Default rating-count threshold for the controversial table.
pub const DEFAULT_MIN_RATINGS: u64 = 50;

/// Tunables shared by every query an `AnalyticsEngine` runs.
///
/// # Example
///
/// ```rust
/// use analytics::AnalyticsConfig;
///
/// let config = AnalyticsConfig::default()
///     .with_min_votes(100)
///     .with_limit(5);
/// assert_eq!(config.min_votes, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Maximum rows in a ranked table.
    pub limit: usize,
    /// Minimum number of ratings for `top_rated_with_min_votes`.
    pub min_votes: u64,
    /// Minimum number of ratings for `controversial_movies`.
    pub min_ratings: u64,
}

impl AnalyticsConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_votes(mut self, min_votes: u64) -> Self {
        self.min_votes = min_votes;
        self
    }

    pub fn with_min_ratings(mut self, min_ratings: u64) -> Self {
        self.min_ratings = min_ratings;
        self
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_votes: DEFAULT_MIN_VOTES,
            min_ratings: DEFAULT_MIN_RATINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.limit, 10);
        assert_eq!(config.min_votes, 50);
        assert_eq!(config.min_ratings, 50);
    }

    #[test]
    fn test_builder_chain() {
        let config = AnalyticsConfig::default()
            .with_limit(3)
            .with_min_votes(1)
            .with_min_ratings(2);
        assert_eq!(config, AnalyticsConfig { limit: 3, min_votes: 1, min_ratings: 2 });
    }
}
