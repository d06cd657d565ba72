use analytics::config::{DEFAULT_LIMIT, DEFAULT_MIN_RATINGS, DEFAULT_MIN_VOTES};
use analytics::{AnalyticsConfig, AnalyticsEngine, QueryKind};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

mod render;

use render::{OutputFormat, print_output};

/// movie-stats - aggregate statistics over a movie ratings dataset
#[derive(Parser)]
#[command(name = "movie-stats")]
#[command(about = "Aggregate statistics over a MovieLens-style ratings dataset", long_about = None)]
struct Cli {
    /// Directory containing ratings.csv and movies.csv
    #[arg(short, long, env = "MOVIE_STATS_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum rows in ranked tables
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movie with the lowest average rating
    LowestRated,

    /// Users who rated the most movies
    TopUsers,

    /// Number of ratings per calendar day (UTC)
    RatingsOverTime,

    /// Highest average rating among movies with enough votes
    TopRated {
        /// Minimum number of ratings a movie needs
        #[arg(long, default_value_t = DEFAULT_MIN_VOTES)]
        min_votes: u64,
    },

    /// Movies with the largest rating standard deviation
    Controversial {
        /// Minimum number of ratings a movie needs
        #[arg(long, default_value_t = DEFAULT_MIN_RATINGS)]
        min_ratings: u64,
    },

    /// Average rating per genre
    Genres,

    /// Number of ratings per hour of day (UTC)
    ActiveHours,

    /// Run a query by name, e.g. `top-users`
    Run {
        query: String,
    },

    /// Re-run a query repeatedly and report latency
    Benchmark {
        /// Query to run
        #[arg(long, default_value = "top-rated")]
        query: String,

        /// Number of runs
        #[arg(long, default_value = "20")]
        iterations: usize,

        /// Runs in flight at once
        #[arg(long, default_value = "4")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_files(&cli.data_dir)
            .with_context(|| format!("Failed to load dataset from {}", cli.data_dir.display()))?,
    );
    info!("Loaded dataset in {:?}", start.elapsed());

    let mut config = AnalyticsConfig::default().with_limit(cli.limit);
    let kind = match cli.command {
        Commands::LowestRated => QueryKind::LowestRated,
        Commands::TopUsers => QueryKind::TopUsers,
        Commands::RatingsOverTime => QueryKind::RatingsOverTime,
        Commands::TopRated { min_votes } => {
            config = config.with_min_votes(min_votes);
            QueryKind::TopRated
        }
        Commands::Controversial { min_ratings } => {
            config = config.with_min_ratings(min_ratings);
            QueryKind::Controversial
        }
        Commands::Genres => QueryKind::Genres,
        Commands::ActiveHours => QueryKind::ActiveHours,
        Commands::Run { query } => parse_query(&query)?,
        Commands::Benchmark {
            query,
            iterations,
            concurrent,
        } => {
            let engine = AnalyticsEngine::new(dataset).with_config(config);
            return handle_benchmark(engine, parse_query(&query)?, iterations, concurrent).await;
        }
    };

    let engine = AnalyticsEngine::new(dataset).with_config(config);
    let output = engine
        .run(kind)
        .with_context(|| format!("Query {} failed", kind))?;
    print_output(&output, cli.format)
}

fn parse_query(name: &str) -> Result<QueryKind> {
    name.parse::<QueryKind>().with_context(|| {
        let known: Vec<&str> = QueryKind::ALL.iter().map(|k| k.name()).collect();
        format!("Known queries: {}", known.join(", "))
    })
}

/// Handle the 'benchmark' command
///
/// Runs are dispatched on blocking tasks in batches of `concurrent`. Every
/// run must serialize to the same bytes; a mismatch aborts the benchmark.
async fn handle_benchmark(
    engine: AnalyticsEngine,
    kind: QueryKind,
    iterations: usize,
    concurrent: usize,
) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }
    let concurrent = concurrent.max(1);

    let wall = Instant::now();
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut baseline: Option<String> = None;
    let mut remaining = iterations;

    while remaining > 0 {
        let batch = remaining.min(concurrent);
        let mut handles = Vec::with_capacity(batch);
        for _ in 0..batch {
            let engine = engine.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                let output = engine.run(kind)?;
                let elapsed = start.elapsed();
                Ok::<_, anyhow::Error>((elapsed, serde_json::to_string(&output)?))
            }));
        }

        for handle in handles {
            let (elapsed, encoded) = handle.await.context("Benchmark task panicked")??;
            match &baseline {
                None => baseline = Some(encoded),
                Some(expected) if *expected != encoded => {
                    bail!("Query {} produced different output across runs", kind)
                }
                Some(_) => {}
            }
            timings.push(elapsed);
        }
        remaining -= batch;
    }

    let wall = wall.elapsed();
    timings.sort();
    let total: Duration = timings.iter().sum();

    println!("{}", format!("Benchmark results for {}:", kind).bold().blue());
    println!("Runs: {} ({} concurrent)", timings.len(), concurrent);
    println!("Wall time: {:?}", wall);
    println!("Average latency: {:?}", total / timings.len() as u32);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!(
        "Throughput: {:.2} queries/second",
        timings.len() as f64 / wall.as_secs_f64()
    );
    println!("{} All runs returned identical output", "✓".green());

    Ok(())
}

/// Nearest-rank percentile over sorted timings.
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64 * p).ceil() as usize).clamp(1, sorted.len()) - 1;
    sorted[idx]
}
