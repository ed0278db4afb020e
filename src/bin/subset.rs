#[macro_use] extern crate log;

use std::io::{self, Read};
use std::process;

use clap::Parser;

use percolation::randomized_queue::subset;
use percolation::{logging, random, Result};

/// Reads whitespace-separated strings from stdin and prints K of them,
/// chosen uniformly at random.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many strings to print
    k: usize,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<()> {
    logging::init(logging::level_for_verbosity(args.verbose), None)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    info!("read {} bytes from stdin", input.len());

    for word in subset(input.split_whitespace(), args.k, random::entropy_rng())? {
        println!("{}", word);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
