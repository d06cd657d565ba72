//! Result rows returned by the queries.
//!
//! Every type here is plain data with `Serialize`, so the presentation
//! layer can render it as a table, a chart, or JSON.

use chrono::NaiveDate;
use data_loader::{MovieId, UserId};
use serde::Serialize;
use std::fmt;

/// A row together with its 1-based position in a sorted table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub rank: usize,
    #[serde(flatten)]
    pub row: T,
}

/// Number rows 1..n in iteration order.
pub fn rank<T>(rows: impl IntoIterator<Item = T>) -> Vec<Ranked<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| Ranked { rank: idx + 1, row })
        .collect()
}

/// The movie with the lowest average rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowestRatedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub avg_rating: f64,
    pub num_ratings: u64,
}

impl fmt::Display for LowestRatedMovie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lowest rated movie: {} ({:.2})", self.title, self.avg_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserActivity {
    pub user_id: UserId,
    pub count: u64,
}

/// Ratings recorded on one UTC calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Ratings recorded during one UTC hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    /// 0..=23
    pub hour: u32,
    /// 12-hour clock label, e.g. "01 PM"
    pub time: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRatedMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub avg_rating: f64,
    pub num_ratings: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControversialMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub avg_rating: f64,
    pub stddev_rating: f64,
    pub num_ratings: u64,
}

/// Mean rating across every rating of every movie tagged with `genre`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRating {
    pub genre: String,
    pub avg_rating: f64,
    /// Ratings that contributed to this genre.
    pub num_ratings: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_one_based() {
        let ranked = rank(vec!["a", "b", "c"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ranked[2].row, "c");
    }

    #[test]
    fn test_lowest_rated_display_rounds() {
        let lowest = LowestRatedMovie {
            movie_id: 2,
            title: "Gigli (2003)".to_string(),
            avg_rating: 1.0,
            num_ratings: 1,
        };
        assert_eq!(lowest.to_string(), "Lowest rated movie: Gigli (2003) (1.00)");

        let lowest = LowestRatedMovie {
            avg_rating: 1.23456,
            ..lowest
        };
        assert!(lowest.to_string().ends_with("(1.23)"));
    }
}
