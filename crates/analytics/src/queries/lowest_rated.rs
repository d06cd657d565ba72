//! Lowest average rating across all movies.

use crate::error::{AnalyticsError, Result};
use crate::stats::movie_aggregates;
use crate::tables::LowestRatedMovie;
use data_loader::{MovieTable, Rating};
use tracing::debug;

/// Find the movie with the minimum mean rating.
///
/// Ties on the mean go to the lowest movie id. Fails with `EmptyInput`
/// when there are no ratings and `NotFound` when the winning movie id has
/// no row in the movies table.
pub fn lowest_avg_movie(ratings: &[Rating], movies: &MovieTable) -> Result<LowestRatedMovie> {
    if ratings.is_empty() {
        return Err(AnalyticsError::EmptyInput {
            query: "lowest_avg_movie",
        });
    }

    let aggregates = movie_aggregates(ratings);
    let lowest = aggregates
        .iter()
        .min_by(|a, b| {
            a.mean
                .total_cmp(&b.mean)
                .then_with(|| a.movie_id.cmp(&b.movie_id))
        })
        .ok_or(AnalyticsError::EmptyInput {
            query: "lowest_avg_movie",
        })?;
    debug!(
        "Lowest mean {:.3} for movie {} over {} movies",
        lowest.mean,
        lowest.movie_id,
        aggregates.len()
    );

    let movie = movies
        .get(&lowest.movie_id)
        .ok_or(AnalyticsError::NotFound {
            movie_id: lowest.movie_id,
        })?;

    Ok(LowestRatedMovie {
        movie_id: lowest.movie_id,
        title: movie.title.clone(),
        avg_rating: lowest.mean,
        num_ratings: lowest.count,
    })
}
