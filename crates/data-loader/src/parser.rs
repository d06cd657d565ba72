//! Parser for the MovieLens CSV files.
//!
//! - ratings.csv: userId,movieId,rating,timestamp
//! - movies.csv: movieId,title,genres
//!
//! Both files carry a header row. Columns are decoded into fixed schemas
//! instead of being inferred from content, so a rating of `4` and `4.0`
//! mean the same thing and a non-numeric id is a hard error.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const RATINGS_FILE: &str = "ratings.csv";
const MOVIES_FILE: &str = "movies.csv";

/// Inclusive bounds accepted for a rating value
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Row schema of ratings.csv
#[derive(Debug, Deserialize)]
struct RatingRow {
    #[serde(rename = "userId")]
    user_id: UserId,
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    rating: f64,
    timestamp: i64,
}

/// Row schema of movies.csv
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    title: String,
    genres: String,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Parse the ratings file at `path`
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    parse_ratings_from_reader(open(path)?, RATINGS_FILE)
}

/// Parse ratings from any reader; `source` names the input in errors.
pub fn parse_ratings_from_reader<R: Read>(input: R, source: &str) -> Result<Vec<Rating>> {
    let mut reader = csv_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::from_csv(source, e))?
        .clone();

    let mut ratings = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| DataLoadError::from_csv(source, e))?
    {
        let row: RatingRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::from_csv(source, e))?;

        if !row.rating.is_finite() || row.rating < MIN_RATING || row.rating > MAX_RATING {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                value: row.rating.to_string(),
            });
        }

        ratings.push(Rating {
            user_id: row.user_id,
            movie_id: row.movie_id,
            rating: row.rating,
            timestamp: row.timestamp,
        });
    }
    Ok(ratings)
}

/// Parse the movies file at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    parse_movies_from_reader(open(path)?, MOVIES_FILE)
}

/// Parse movies from any reader; `source` names the input in errors.
///
/// Titles may be quoted and contain commas: `"American President, The (1995)"`.
pub fn parse_movies_from_reader<R: Read>(input: R, source: &str) -> Result<Vec<Movie>> {
    let mut reader = csv_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::from_csv(source, e))?
        .clone();

    let mut movies = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| DataLoadError::from_csv(source, e))?
    {
        let row: MovieRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::from_csv(source, e))?;

        movies.push(Movie::new(row.movie_id, row.title, &row.genres));
    }
    Ok(movies)
}
