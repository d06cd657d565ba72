use anyhow::{Context, Result};
use data_loader::Dataset;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> Result<()> {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    println!("Loading ratings dataset from {}...\n", data_dir.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_files(&data_dir).context("Failed to load dataset")?;
    let elapsed = start.elapsed();

    let (movies, ratings) = dataset.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Ratings: {}", ratings);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
    Ok(())
}
