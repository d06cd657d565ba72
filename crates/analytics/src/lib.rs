//! Aggregation engine for the movie ratings dataset.
//!
//! This crate provides:
//! - Grouped per-movie statistics (count, mean, sample deviation)
//! - An `AggregateFilter` pipeline for vote thresholds
//! - The ranked and time-series queries
//! - `AnalyticsEngine`, which runs them against a shared `Dataset`
//!
//! ## Architecture
//! Every query is a pure function of the two input tables:
//! 1. Ratings are grouped by key (movie, user, date, hour or genre)
//! 2. Threshold filters drop groups with too few ratings
//! 3. Groups are sorted with a total tie-break and capped
//! 4. Movie ids are inner-joined to titles
//!
//! ## Example Usage
//! ```ignore
//! use analytics::{AnalyticsEngine, QueryKind};
//! use data_loader::Dataset;
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::load_from_files("data".as_ref())?);
//! let engine = AnalyticsEngine::new(dataset);
//!
//! println!("{}", engine.lowest_avg_movie()?);
//! let top = engine.run(QueryKind::TopRated)?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod queries;
pub mod stats;
pub mod tables;
pub mod traits;

// Re-export main types
pub use config::AnalyticsConfig;
pub use engine::{AnalyticsEngine, QueryKind, QueryOutput};
pub use error::{AnalyticsError, Result};
pub use filter_pipeline::FilterPipeline;
pub use stats::MovieAggregate;
pub use tables::{
    ControversialMovie, DailyCount, GenreRating, HourlyCount, LowestRatedMovie, Ranked,
    TopRatedMovie, UserActivity,
};
pub use traits::AggregateFilter;
