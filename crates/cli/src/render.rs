//! Terminal rendering for query results.
//!
//! Ranked queries print as tables, time series and genre means as
//! horizontal bar charts. `--format json` bypasses all of this and prints
//! the serialized `QueryOutput`.

use analytics::{
    ControversialMovie, DailyCount, GenreRating, HourlyCount, QueryOutput, Ranked, TopRatedMovie,
    UserActivity,
};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

const TITLE_WIDTH: usize = 48;
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_output(output: &QueryOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(output)?),
        OutputFormat::Text => print_text(output),
    }
    Ok(())
}

fn print_text(output: &QueryOutput) {
    if output.is_empty() {
        println!("{}", "No rows matched.".yellow());
        return;
    }

    match output {
        QueryOutput::LowestRated(lowest) => {
            println!("{}", "Movie with the Lowest Average Rating".bold().blue());
            println!("{} {}", "•".red(), lowest);
        }
        QueryOutput::TopUsers(rows) => print_top_users(rows),
        QueryOutput::RatingsOverTime(rows) => print_timeline(rows),
        QueryOutput::TopRated(rows) => print_top_rated(rows),
        QueryOutput::Controversial(rows) => print_controversial(rows),
        QueryOutput::Genres(rows) => print_genres(rows),
        QueryOutput::ActiveHours(rows) => print_hours(rows),
    }
}

fn print_top_users(rows: &[Ranked<UserActivity>]) {
    println!("{}", "Users Who Rated the Most Movies".bold().blue());
    println!("{}", format!("{:>4}  {:>8}  {:>8}", "Rank", "User", "Ratings").bold());
    for ranked in rows {
        println!(
            "{:>4}  {:>8}  {:>8}",
            ranked.rank.to_string().green(),
            ranked.row.user_id,
            ranked.row.count
        );
    }
}

fn print_timeline(rows: &[DailyCount]) {
    println!("{}", "Ratings Trend Over Time".bold().blue());
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0) as f64;
    for day in rows {
        println!(
            "{}  {} {}",
            day.date,
            bar(day.count as f64, max, BAR_WIDTH).cyan(),
            day.count
        );
    }
}

fn print_top_rated(rows: &[Ranked<TopRatedMovie>]) {
    println!("{}", "Top Rated Movies".bold().blue());
    println!(
        "{}",
        format!("{:>4}  {:<w$}  {:>6}  {:>7}", "Rank", "Title", "Avg", "Ratings", w = TITLE_WIDTH)
            .bold()
    );
    for ranked in rows {
        println!(
            "{:>4}  {:<w$}  {:>6.2}  {:>7}",
            ranked.rank.to_string().green(),
            fit_title(&ranked.row.title, TITLE_WIDTH),
            ranked.row.avg_rating,
            ranked.row.num_ratings,
            w = TITLE_WIDTH
        );
    }
}

fn print_controversial(rows: &[Ranked<ControversialMovie>]) {
    println!("{}", "Movies with the Most Rating Disagreement".bold().blue());
    println!(
        "{}",
        format!(
            "{:>4}  {:<w$}  {:>6}  {:>7}  {:>7}",
            "Rank", "Title", "Avg", "Std Dev", "Ratings",
            w = TITLE_WIDTH
        )
        .bold()
    );
    for ranked in rows {
        println!(
            "{:>4}  {:<w$}  {:>6.2}  {:>7.3}  {:>7}",
            ranked.rank.to_string().green(),
            fit_title(&ranked.row.title, TITLE_WIDTH),
            ranked.row.avg_rating,
            ranked.row.stddev_rating,
            ranked.row.num_ratings,
            w = TITLE_WIDTH
        );
    }
}

fn print_genres(rows: &[Ranked<GenreRating>]) {
    println!("{}", "Average Rating by Genre".bold().blue());
    let width = rows.iter().map(|r| r.row.genre.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|r| r.row.avg_rating).fold(0.0, f64::max);
    for ranked in rows {
        println!(
            "{:<width$}  {} {:.2}",
            ranked.row.genre,
            bar(ranked.row.avg_rating, max, BAR_WIDTH).magenta(),
            ranked.row.avg_rating,
            width = width
        );
    }
}

fn print_hours(rows: &[HourlyCount]) {
    println!("{}", "Most Active Rating Hours (UTC)".bold().blue());
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0) as f64;
    for hour in rows {
        println!(
            "{}  {} {}",
            hour.time,
            bar(hour.count as f64, max, BAR_WIDTH).cyan(),
            hour.count
        );
    }
}

/// A bar of `width` cells scaled so that `max` fills it.
///
/// Any positive value gets at least one cell.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if width == 0 || !(max > 0.0 && value > 0.0) {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// Truncate `title` to `width` characters, marking the cut with an ellipsis.
pub fn fit_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let kept: String = title.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
