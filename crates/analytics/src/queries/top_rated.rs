//! Highest average rating among movies with enough votes.

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::MinimumCountFilter;
use crate::stats::movie_aggregates;
use crate::tables::{Ranked, TopRatedMovie, rank};
use data_loader::{MovieTable, Rating};

/// Top `limit` movies by average rating among those with at least
/// `min_votes` ratings.
///
/// ## Algorithm
/// 1. Aggregate per movie and keep counts >= `min_votes`
/// 2. Sort by mean descending, then count descending, then movie id ascending
/// 3. Inner-join to the movies table (unknown ids are dropped)
/// 4. Take `limit` rows and number them
///
/// The join runs before truncation, so a dangling id never costs a slot.
pub fn top_rated_with_min_votes(
    ratings: &[Rating],
    movies: &MovieTable,
    min_votes: u64,
    limit: usize,
) -> Result<Vec<Ranked<TopRatedMovie>>> {
    let pipeline = FilterPipeline::new().add_filter(MinimumCountFilter::new(min_votes));
    let mut qualifying = pipeline.apply(movie_aggregates(ratings))?;

    qualifying.sort_unstable_by(|a, b| {
        b.mean
            .total_cmp(&a.mean)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    });

    // Join before `take`: a movie id without a title row is skipped rather
    // than truncated into a shorter table, so the cap always counts titled rows.
    let rows = qualifying
        .into_iter()
        .filter_map(|agg| {
            let movie = movies.get(&agg.movie_id)?;
            Some(TopRatedMovie {
                movie_id: agg.movie_id,
                title: movie.title.clone(),
                avg_rating: agg.mean,
                num_ratings: agg.count,
            })
        })
        .take(limit);

    Ok(rank(rows))
}
