//! Integration tests for the aggregation engine.
//!
//! These run every query against a seeded synthetic dataset and check the
//! ordering and threshold guarantees that hold for any input.

use analytics::{AnalyticsConfig, AnalyticsEngine, QueryKind, QueryOutput};
use data_loader::{Dataset, Movie, Rating};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi"];

/// 120 movies; ratings reference ids `1..=rated_movies`, so values above
/// 120 leave some ratings without a movie row.
fn synthetic_dataset(seed: u64, rated_movies: u32) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut movies = Vec::new();
    for id in 1..=120u32 {
        let first = GENRES[rng.random_range(0..GENRES.len())];
        let second = GENRES[rng.random_range(0..GENRES.len())];
        movies.push(Movie::new(id, format!("Movie {id}"), &format!("{first}|{second}")));
    }

    let mut ratings = Vec::new();
    for user_id in 1..=200u32 {
        let votes = rng.random_range(1..=60);
        for _ in 0..votes {
            ratings.push(Rating {
                user_id,
                movie_id: rng.random_range(1..=rated_movies),
                rating: rng.random_range(1..=10) as f64 * 0.5,
                timestamp: rng.random_range(1_000_000_000..1_100_000_000),
            });
        }
    }

    Dataset::from_parts(ratings, movies).expect("synthetic dataset is valid")
}

fn engine(config: AnalyticsConfig) -> AnalyticsEngine {
    AnalyticsEngine::new(Arc::new(synthetic_dataset(7, 120))).with_config(config)
}

#[test]
fn test_ranked_tables_respect_cap() {
    let engine = engine(AnalyticsConfig::default().with_min_votes(5).with_min_ratings(5));

    assert!(engine.top_users().len() <= 10);
    assert!(engine.top_rated_with_min_votes().unwrap().len() <= 10);
    assert!(engine.controversial_movies().unwrap().len() <= 10);
}

#[test]
fn test_top_users_monotonic() {
    let engine = engine(AnalyticsConfig::default());
    let top = engine.top_users();

    assert_eq!(top.len(), 10);
    for (idx, row) in top.iter().enumerate() {
        assert_eq!(row.rank, idx + 1);
    }
    for pair in top.windows(2) {
        assert!(pair[0].row.count >= pair[1].row.count);
    }
}

#[test]
fn test_top_rated_threshold_holds_and_shrinks() {
    let mut previous = usize::MAX;
    for min_votes in [0, 50, 80, 100, 120, 1_000] {
        let engine = engine(AnalyticsConfig::default().with_min_votes(min_votes).with_limit(usize::MAX));
        let rows = engine.top_rated_with_min_votes().unwrap();

        assert!(rows.iter().all(|r| r.row.num_ratings >= min_votes));
        assert!(rows.len() <= previous, "raising the threshold grew the result");
        for pair in rows.windows(2) {
            assert!(pair[0].row.avg_rating >= pair[1].row.avg_rating);
        }
        previous = rows.len();
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_controversial_sorted_and_non_negative() {
    let engine = engine(AnalyticsConfig::default().with_min_ratings(20));
    let rows = engine.controversial_movies().unwrap();

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.row.stddev_rating >= 0.0));
    assert!(rows.iter().all(|r| r.row.num_ratings >= 20));
    for pair in rows.windows(2) {
        assert!(pair[0].row.stddev_rating >= pair[1].row.stddev_rating);
    }
}

#[test]
fn test_joined_tables_skip_unknown_movies() {
    let dataset = synthetic_dataset(11, 125);
    let dangling = dataset.ratings().iter().filter(|r| r.movie_id > 120).count();
    assert!(dangling > 0);

    let engine = AnalyticsEngine::new(Arc::new(dataset))
        .with_config(AnalyticsConfig::default().with_min_votes(0).with_limit(usize::MAX));
    let rows = engine.top_rated_with_min_votes().unwrap();

    assert!(rows.iter().all(|r| r.row.movie_id <= 120));
    assert_eq!(rows.last().map(|r| r.rank), Some(rows.len()));
}

#[test]
fn test_timeline_sorted_without_zero_rows() {
    let engine = engine(AnalyticsConfig::default());

    let days = engine.rating_distribution_by_date().unwrap();
    assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    assert!(days.iter().all(|d| d.count > 0));
    let total: u64 = days.iter().map(|d| d.count).sum();
    assert_eq!(total as usize, engine.dataset().ratings().len());

    let hours = engine.ratings_by_hour().unwrap();
    assert!(hours.windows(2).all(|w| w[0].hour < w[1].hour));
    assert!(hours.iter().all(|h| h.hour < 24));
}

#[test]
fn test_genre_means_are_multi_label() {
    let engine = engine(AnalyticsConfig::default());
    let rows = engine.avg_rating_by_genre();

    let genre_votes: u64 = rows.iter().map(|r| r.row.num_ratings).sum();
    let joined_ratings = engine
        .dataset()
        .ratings()
        .iter()
        .filter(|r| engine.dataset().get_movie(r.movie_id).is_some())
        .count() as u64;

    // Movies tagged with two distinct genres count their ratings twice.
    assert!(genre_votes >= joined_ratings);
    for pair in rows.windows(2) {
        assert!(pair[0].row.avg_rating >= pair[1].row.avg_rating);
    }
}

#[test]
fn test_reruns_are_byte_identical() {
    let first = engine(AnalyticsConfig::default().with_min_votes(10).with_min_ratings(10));
    let second = engine(AnalyticsConfig::default().with_min_votes(10).with_min_ratings(10));

    for kind in QueryKind::ALL {
        let a = serde_json::to_string(&first.run(kind).unwrap()).unwrap();
        let b = serde_json::to_string(&first.run(kind).unwrap()).unwrap();
        let c = serde_json::to_string(&second.run(kind).unwrap()).unwrap();
        assert_eq!(a, b, "{kind} changed between runs");
        assert_eq!(a, c, "{kind} changed between reloads");
    }
}

#[test]
fn test_lowest_rated_matches_minimum_mean() {
    let engine = engine(AnalyticsConfig::default());
    let lowest = engine.lowest_avg_movie().unwrap();

    let aggregates = analytics::stats::movie_aggregates(engine.dataset().ratings());
    let min_mean = aggregates
        .iter()
        .map(|a| a.mean)
        .fold(f64::INFINITY, f64::min);

    assert_eq!(lowest.avg_rating, min_mean);
    assert!(lowest.to_string().starts_with("Lowest rated movie: Movie "));
}

#[test]
fn test_output_json_shape() {
    let engine = engine(AnalyticsConfig::default());
    let json = serde_json::to_value(engine.run(QueryKind::TopUsers).unwrap()).unwrap();

    assert_eq!(json["query"], "top-users");
    assert_eq!(json["rows"][0]["rank"], 1);
    assert!(json["rows"][0]["user_id"].is_u64());
    assert!(matches!(
        engine.run(QueryKind::Genres).unwrap(),
        QueryOutput::Genres(_)
    ));
}
