#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use perc::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

#[derive(Parser)]
#[command(version, about = "Estimates the percolation threshold of a square grid", long_about = None)]
struct Arguments {
    /// Grid dimension n.
    grid_size: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for the random generator. Drawn from OS entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 2)]
    log_level: usize,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .module("perc")
        .init()
        .context("failed to initialize logger")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let stats = PercolationStats::new(args.grid_size, args.trials, &mut rng)?;
    let elapsed = started.elapsed();

    println!("mean()           = {:.6}", stats.mean());
    println!("stddev()         = {:.6}", stats.stddev());
    println!("confidenceLow()  = {:.6}", stats.confidence_low());
    println!("confidenceHigh() = {:.6}", stats.confidence_high());
    println!("elapsed time     = {:.3}", elapsed.as_secs_f64());

    Ok(())
}
