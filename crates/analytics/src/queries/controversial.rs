//! Movies whose raters disagree the most.

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{DefinedSpreadFilter, MinimumCountFilter};
use crate::stats::movie_aggregates;
use crate::tables::{ControversialMovie, Ranked, rank};
use data_loader::{MovieTable, Rating};

/// Top `limit` movies by sample standard deviation of their ratings among
/// those with at least `min_ratings` ratings.
///
/// Movies with a single rating have no sample deviation and are excluded,
/// which only matters when `min_ratings < 2`. Ties on the deviation break
/// by count descending, then movie id ascending. Unknown movie ids are
/// dropped before truncation.
pub fn controversial_movies(
    ratings: &[Rating],
    movies: &MovieTable,
    min_ratings: u64,
    limit: usize,
) -> Result<Vec<Ranked<ControversialMovie>>> {
    let pipeline = FilterPipeline::new()
        .add_filter(MinimumCountFilter::new(min_ratings))
        .add_filter(DefinedSpreadFilter);

    // DefinedSpreadFilter leaves only aggregates with `stddev: Some(_)`.
    let mut spread = pipeline.apply(movie_aggregates(ratings))?;

    spread.sort_unstable_by(|a, b| {
        b.stddev
            .unwrap_or_default()
            .total_cmp(&a.stddev.unwrap_or_default())
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    });

    // Join before `take`: a movie id without a title row is skipped rather
    // than truncated into a shorter table, so the cap always counts titled rows.
    let rows = spread
        .into_iter()
        .filter_map(|agg| {
            let movie = movies.get(&agg.movie_id)?;
            Some(ControversialMovie {
                movie_id: agg.movie_id,
                title: movie.title.clone(),
                avg_rating: agg.mean,
                stddev_rating: agg.stddev.unwrap_or_default(),
                num_ratings: agg.count,
            })
        })
        .take(limit);

    Ok(rank(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures::{movies, votes};

    #[test]
    fn test_sorted_by_spread() {
        let mut ratings = votes(1, &[1.0, 5.0, 1.0, 5.0]);
        ratings.extend(votes(2, &[3.0, 3.0, 3.0, 3.0]));
        ratings.extend(votes(3, &[2.0, 4.0, 3.0, 3.0]));
        let movies = movies(&[(1, "Divisive", ""), (2, "Consensus", ""), (3, "Mild", "")]);

        let rows = controversial_movies(&ratings, &movies, 4, 10).unwrap();
        let ids: Vec<u32> = rows.iter().map(|r| r.row.movie_id).collect();

        assert_eq!(ids, vec![1, 3, 2]);
        assert!(rows.iter().all(|r| r.row.stddev_rating >= 0.0));
        for pair in rows.windows(2) {
            assert!(pair[0].row.stddev_rating >= pair[1].row.stddev_rating);
        }
        assert_eq!(rows[2].row.stddev_rating, 0.0);
    }

    #[test]
    fn test_ties_break_by_count_then_id() {
        let mut ratings = votes(5, &[4.0, 4.0]);
        ratings.extend(votes(3, &[4.0, 4.0]));
        ratings.extend(votes(8, &[4.0, 4.0, 4.0]));
        ratings.extend(votes(1, &[1.0, 5.0]));
        let movies = movies(&[(1, "One", ""), (3, "Three", ""), (5, "Five", ""), (8, "Eight", "")]);

        let rows = controversial_movies(&ratings, &movies, 2, 10).unwrap();
        let ids: Vec<u32> = rows.iter().map(|r| r.row.movie_id).collect();

        // 3, 5 and 8 all have zero spread.
        assert_eq!(ids, vec![1, 8, 3, 5]);
        assert!(rows[1..].iter().all(|r| r.row.stddev_rating == 0.0));
    }

    #[test]
    fn test_dangling_movie_does_not_take_a_slot() {
        let mut ratings = votes(99, &[0.5, 5.0]);
        ratings.extend(votes(1, &[1.0, 4.0]));
        ratings.extend(votes(2, &[2.0, 3.0]));
        let movies = movies(&[(1, "One", ""), (2, "Two", "")]);

        let rows = controversial_movies(&ratings, &movies, 2, 2).unwrap();
        let ids: Vec<u32> = rows.iter().map(|r| r.row.movie_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_low_threshold_excludes_single_ratings() {
        let mut ratings = votes(1, &[5.0]);
        ratings.extend(votes(2, &[1.0, 2.0]));
        let movies = movies(&[(1, "Single", ""), (2, "Pair", "")]);

        let rows = controversial_movies(&ratings, &movies, 0, 10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row.movie_id, 2);
    }

    #[test]
    fn test_capped_at_limit() {
        let mut ratings = Vec::new();
        let mut entries = Vec::new();
        for id in 1..=15u32 {
            ratings.extend(votes(id, &[1.0, 1.0 + f64::from(id) * 0.25]));
            entries.push((id, "Movie", ""));
        }
        let movies = movies(&entries);

        let rows = controversial_movies(&ratings, &movies, 2, 10).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].row.movie_id, 15);
        assert_eq!(rows[9].rank, 10);
    }
}
