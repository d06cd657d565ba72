//! Dataset loading logic.
//!
//! Parses both tables, builds the movie lookup, and validates what the
//! loader is responsible for. Ratings that reference an unknown movie are
//! kept: queries that join on movieId drop them, which is the documented
//! inner-join behaviour.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl Dataset {
    /// Load `ratings.csv` and `movies.csv` from a directory
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        Self::load(&data_dir.join("ratings.csv"), &data_dir.join("movies.csv"))
    }

    /// Load the two tables from explicit paths.
    ///
    /// Both files are parsed in parallel with `rayon::join`.
    pub fn load(ratings_path: &Path, movies_path: &Path) -> Result<Self> {
        info!(
            ratings = %ratings_path.display(),
            movies = %movies_path.display(),
            "Loading ratings dataset"
        );

        let (ratings, movies) = rayon::join(
            || parser::parse_ratings(ratings_path),
            || parser::parse_movies(movies_path),
        );
        let ratings = ratings?;
        let movies = movies?;

        let dataset = Self::from_parts(ratings, movies)?;
        let (movie_count, rating_count) = dataset.counts();
        info!("Loaded {} movies, {} ratings", movie_count, rating_count);
        Ok(dataset)
    }

    /// Build a dataset from already-parsed records.
    pub fn from_parts(ratings: Vec<Rating>, movies: Vec<Movie>) -> Result<Self> {
        let mut dataset = Dataset::new();
        for movie in movies {
            if dataset.movies.contains_key(&movie.id) {
                return Err(DataLoadError::DuplicateMovie {
                    file: "movies".to_string(),
                    movie_id: movie.id,
                });
            }
            dataset.insert_movie(movie);
        }
        dataset.ratings = ratings;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Validate data integrity
    ///
    /// Check that every rating value is finite and within
    /// `[MIN_RATING, MAX_RATING]`. Dangling movie references are only
    /// counted and logged.
    pub fn validate(&self) -> Result<()> {
        let mut dangling = 0usize;
        for rating in &self.ratings {
            if !rating.rating.is_finite()
                || rating.rating < parser::MIN_RATING
                || rating.rating > parser::MAX_RATING
            {
                return Err(DataLoadError::InvalidValue {
                    field: "rating".to_string(),
                    value: rating.rating.to_string(),
                });
            }
            if !self.movies.contains_key(&rating.movie_id) {
                dangling += 1;
            }
        }

        if dangling > 0 {
            warn!(
                "{} ratings reference movies missing from the movies table; joined queries will drop them",
                dangling
            );
        } else {
            debug!("All ratings reference known movies");
        }
        Ok(())
    }
}
