//! # Analytics Engine
//!
//! The single long-lived context object that owns the loaded tables and
//! the query configuration. A presentation layer holds one engine and asks
//! it for queries by method or by name; there is no global session.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use data_loader::Dataset;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::queries;
use crate::tables::{
    ControversialMovie, DailyCount, GenreRating, HourlyCount, LowestRatedMovie, Ranked,
    TopRatedMovie, UserActivity,
};

/// Queries the engine can run by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    LowestRated,
    TopUsers,
    RatingsOverTime,
    TopRated,
    Controversial,
    Genres,
    ActiveHours,
}

impl QueryKind {
    pub const ALL: [QueryKind; 7] = [
        QueryKind::LowestRated,
        QueryKind::TopUsers,
        QueryKind::RatingsOverTime,
        QueryKind::TopRated,
        QueryKind::Controversial,
        QueryKind::Genres,
        QueryKind::ActiveHours,
    ];

    /// The kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::LowestRated => "lowest-rated",
            QueryKind::TopUsers => "top-users",
            QueryKind::RatingsOverTime => "ratings-over-time",
            QueryKind::TopRated => "top-rated",
            QueryKind::Controversial => "controversial",
            QueryKind::Genres => "genres",
            QueryKind::ActiveHours => "active-hours",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        QueryKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| AnalyticsError::UnknownQuery(s.to_string()))
    }
}

/// Result of a query dispatched through [`AnalyticsEngine::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", content = "rows", rename_all = "kebab-case")]
pub enum QueryOutput {
    LowestRated(LowestRatedMovie),
    TopUsers(Vec<Ranked<UserActivity>>),
    RatingsOverTime(Vec<DailyCount>),
    TopRated(Vec<Ranked<TopRatedMovie>>),
    Controversial(Vec<Ranked<ControversialMovie>>),
    Genres(Vec<Ranked<GenreRating>>),
    ActiveHours(Vec<HourlyCount>),
}

impl QueryOutput {
    /// Rows in the result (1 for the scalar summary).
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::LowestRated(_) => 1,
            QueryOutput::TopUsers(rows) => rows.len(),
            QueryOutput::RatingsOverTime(rows) => rows.len(),
            QueryOutput::TopRated(rows) => rows.len(),
            QueryOutput::Controversial(rows) => rows.len(),
            QueryOutput::Genres(rows) => rows.len(),
            QueryOutput::ActiveHours(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the aggregation queries against one immutable dataset.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    dataset: Arc<Dataset>,
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Create an engine with the default configuration
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            config: AnalyticsConfig::default(),
        }
    }

    /// Replace the configuration (builder style)
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn lowest_avg_movie(&self) -> Result<LowestRatedMovie> {
        queries::lowest_avg_movie(self.dataset.ratings(), self.dataset.movies())
    }

    pub fn top_users(&self) -> Vec<Ranked<UserActivity>> {
        queries::top_users(self.dataset.ratings(), self.config.limit)
    }

    pub fn rating_distribution_by_date(&self) -> Result<Vec<DailyCount>> {
        queries::rating_distribution_by_date(self.dataset.ratings())
    }

    pub fn ratings_by_hour(&self) -> Result<Vec<HourlyCount>> {
        queries::ratings_by_hour(self.dataset.ratings())
    }

    pub fn top_rated_with_min_votes(&self) -> Result<Vec<Ranked<TopRatedMovie>>> {
        queries::top_rated_with_min_votes(
            self.dataset.ratings(),
            self.dataset.movies(),
            self.config.min_votes,
            self.config.limit,
        )
    }

    pub fn controversial_movies(&self) -> Result<Vec<Ranked<ControversialMovie>>> {
        queries::controversial_movies(
            self.dataset.ratings(),
            self.dataset.movies(),
            self.config.min_ratings,
            self.config.limit,
        )
    }

    pub fn avg_rating_by_genre(&self) -> Vec<Ranked<GenreRating>> {
        queries::avg_rating_by_genre(self.dataset.ratings(), self.dataset.movies())
    }

    /// Run a query by kind and log how long it took.
    #[instrument(skip(self), fields(query = %kind))]
    pub fn run(&self, kind: QueryKind) -> Result<QueryOutput> {
        let start = Instant::now();

        let output = match kind {
            QueryKind::LowestRated => QueryOutput::LowestRated(self.lowest_avg_movie()?),
            QueryKind::TopUsers => QueryOutput::TopUsers(self.top_users()),
            QueryKind::RatingsOverTime => {
                QueryOutput::RatingsOverTime(self.rating_distribution_by_date()?)
            }
            QueryKind::TopRated => QueryOutput::TopRated(self.top_rated_with_min_votes()?),
            QueryKind::Controversial => QueryOutput::Controversial(self.controversial_movies()?),
            QueryKind::Genres => QueryOutput::Genres(self.avg_rating_by_genre()),
            QueryKind::ActiveHours => QueryOutput::ActiveHours(self.ratings_by_hour()?),
        };

        info!(
            "Query {} returned {} rows in {:.2?}",
            kind,
            output.len(),
            start.elapsed()
        );
        Ok(output)
    }
}
