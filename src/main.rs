#[macro_use] extern crate log;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use percolation::{logging, ExperimentConfig, Result};

/// Estimates the percolation threshold of an N-by-N grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid size N
    #[arg(allow_negative_numbers = true)]
    grid_size: i64,

    /// Number of trials T
    #[arg(allow_negative_numbers = true)]
    trials: i64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials on all cores
    #[arg(short, long)]
    parallel: bool,

    /// More log output on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write debug logs, one JSON record per trial, to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
	logging::init(logging::level_for_verbosity(args.verbose), args.log_file.as_deref())?;

	let mut config = ExperimentConfig::new(args.grid_size, args.trials)?;
	config.seed = args.seed;
	config.parallel = args.parallel;
	info!("{:?}", config);

	let stats = config.run()?;
	println!("mean                    = {}", stats.mean());
	println!("stddev                  = {}", stats.stddev());
	println!("95% confidence interval = {}, {}", stats.confidence_lo(), stats.confidence_hi());
	Ok(())
}

fn main() {
	if let Err(e) = run(Args::parse()) {
		eprintln!("error: {}", e);
		process::exit(1);
	}
}
