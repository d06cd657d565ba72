//! # Data Loader Crate
//!
//! This crate loads the two input tables of the ratings analytics:
//! `ratings.csv` and `movies.csv` in the MovieLens "latest" layout.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Rating, Movie, Dataset)
//! - **parser**: Decode CSV rows into fixed schemas
//! - **index**: Assemble and validate a `Dataset`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_files(Path::new("data"))?;
//! let (movies, ratings) = dataset.counts();
//! println!("{} ratings over {} movies", ratings, movies);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    Movie,
    Rating,
    Dataset,
    MovieTable,
    split_genres,
};
