//! Error types for the aggregation engine.

use data_loader::MovieId;
use thiserror::Error;

/// Errors surfaced by analytics queries.
///
/// A threshold that excludes every movie is not an error: the query returns
/// an empty table. Only queries that must produce a value fail.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// The query needs at least one rating to produce a result.
    #[error("{query}: no ratings to aggregate")]
    EmptyInput { query: &'static str },

    /// A derived movie id has no row in the movies table.
    #[error("Movie not found: {movie_id}")]
    NotFound { movie_id: MovieId },

    /// A timestamp falls outside the representable calendar range.
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// No query is registered under this name.
    #[error("Unknown query: {0}")]
    UnknownQuery(String),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
