//! Average rating per genre.

use crate::tables::{GenreRating, Ranked, rank};
use data_loader::{MovieTable, Rating};
use std::collections::HashMap;

/// Mean rating per genre, descending by mean, ties by genre name.
///
/// A rating counts once toward every genre of its movie, so a genre's
/// mean is taken over all ratings of all movies tagged with it. Ratings of
/// movies missing from the movies table are dropped.
pub fn avg_rating_by_genre(ratings: &[Rating], movies: &MovieTable) -> Vec<Ranked<GenreRating>> {
    let mut totals: HashMap<&str, (f64, u64)> = HashMap::new();
    for rating in ratings {
        let Some(movie) = movies.get(&rating.movie_id) else {
            continue;
        };
        for genre in &movie.genres {
            let entry = totals.entry(genre.as_str()).or_insert((0.0, 0));
            entry.0 += rating.rating;
            entry.1 += 1;
        }
    }

    let mut rows: Vec<GenreRating> = totals
        .into_iter()
        .map(|(genre, (sum, count))| GenreRating {
            genre: genre.to_string(),
            avg_rating: sum / count as f64,
            num_ratings: count,
        })
        .collect();

    rows.sort_unstable_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    rank(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures::{movies, rating};

    #[test]
    fn test_rating_counts_toward_every_genre() {
        let ratings = vec![rating(1, 1, 4.0), rating(2, 2, 2.0)];
        let movies = movies(&[(1, "A", "Action|Comedy"), (2, "B", "Comedy")]);

        let rows = avg_rating_by_genre(&ratings, &movies);
        let summary: Vec<(&str, f64, u64)> = rows
            .iter()
            .map(|r| (r.row.genre.as_str(), r.row.avg_rating, r.row.num_ratings))
            .collect();

        assert_eq!(summary, vec![("Action", 4.0, 1), ("Comedy", 3.0, 2)]);
    }

    #[test]
    fn test_weighted_genre_means_double_count() {
        // One rating of a two-genre movie is counted twice, so the
        // genre-weighted total exceeds the plain rating total.
        let ratings = vec![rating(1, 1, 5.0), rating(1, 2, 1.0)];
        let movies = movies(&[(1, "A", "Drama|War"), (2, "B", "Drama")]);

        let rows = avg_rating_by_genre(&ratings, &movies);
        let weighted: f64 = rows
            .iter()
            .map(|r| r.row.avg_rating * r.row.num_ratings as f64)
            .sum();
        let total: f64 = ratings.iter().map(|r| r.rating).sum();

        assert_eq!(weighted, 11.0);
        assert_ne!(weighted, total);
    }

    #[test]
    fn test_ties_break_by_name_and_unknown_movies_drop() {
        let ratings = vec![rating(1, 1, 3.0), rating(1, 2, 3.0), rating(1, 3, 5.0)];
        let movies = movies(&[(1, "A", "Western"), (2, "B", "Crime")]);

        let rows = avg_rating_by_genre(&ratings, &movies);
        let genres: Vec<&str> = rows.iter().map(|r| r.row.genre.as_str()).collect();
        assert_eq!(genres, vec!["Crime", "Western"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(avg_rating_by_genre(&[], &MovieTable::new()).is_empty());
    }
}
