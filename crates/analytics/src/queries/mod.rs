//! The aggregation queries.
//!
//! Each query is a pure function of the ratings table (and, for joined
//! queries, the movies table). None of them mutate their inputs, and every
//! sorted output uses a total tie-break so results are reproducible.

pub mod activity;
pub mod controversial;
pub mod genres;
pub mod lowest_rated;
pub mod timeline;
pub mod top_rated;

pub use activity::top_users;
pub use controversial::controversial_movies;
pub use genres::avg_rating_by_genre;
pub use lowest_rated::lowest_avg_movie;
pub use timeline::{rating_distribution_by_date, ratings_by_hour};
pub use top_rated::top_rated_with_min_votes;
