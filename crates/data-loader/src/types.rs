//! Core domain types for the ratings dataset.
//!
//! Two immutable tables are modelled here:
//! - the ratings table (`Vec<Rating>`), one record per user/movie interaction
//! - the movies table (`HashMap<MovieId, Movie>`), keyed by movie id
//!
//! `Dataset` owns both and is shared read-only (usually behind an `Arc`)
//! by every query for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// The movies table, keyed by movie id
pub type MovieTable = HashMap<MovieId, Movie>;

// =============================================================================
// Records
// =============================================================================

/// Represents a movie in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Genre names in file order, e.g. `["Adventure", "Animation"]`.
    ///
    /// Kept as strings: the dataset carries values such as `IMAX` and
    /// `(no genres listed)` that a closed enum would reject.
    pub genres: Vec<String>,
}

impl Movie {
    /// Build a movie from the raw pipe-delimited genre column.
    pub fn new(id: MovieId, title: impl Into<String>, genres: &str) -> Self {
        Self {
            id,
            title: title.into(),
            genres: split_genres(genres),
        }
    }
}

/// Split a pipe-delimited genre list, dropping empty tokens.
///
/// Example: "Adventure|Animation|Children" -> ["Adventure", "Animation", "Children"]
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Represents a single rating from a user for a movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Rating value, 0.5 to 5.0 in half steps for MovieLens
    pub rating: f64,
    /// Unix timestamp (seconds) when rating was made
    pub timestamp: i64,
}

// =============================================================================
// Dataset - the two input tables
// =============================================================================

/// Holds the ratings and movies tables.
///
/// Ratings are stored in load order; nothing downstream depends on that
/// order because every query sorts its output with a total tie-break.
#[derive(Debug, Default)]
pub struct Dataset {
    pub(crate) ratings: Vec<Rating>,
    pub(crate) movies: MovieTable,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self {
            ratings: Vec::new(),
            movies: HashMap::new(),
        }
    }

    /// The full ratings table.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// The movies table keyed by id.
    pub fn movies(&self) -> &MovieTable {
        &self.movies
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Insert a movie, replacing any previous record with the same id
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Append a rating
    pub fn insert_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// (movies, ratings) counts for logging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.ratings.len())
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
