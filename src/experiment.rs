//! Monte Carlo estimate of the percolation threshold.
//!
//! Each trial opens uniformly random blocked sites of a fresh grid until it
//! percolates and records the fraction of sites that were open at that point.

use std::convert::TryFrom;

use rand::Rng;
use rayon::prelude::*;
use serde_json::json;

use crate::error::{Error, Result};
use crate::percolation::Percolation;
use crate::random;
use crate::stats;

/// z-score of a two-sided 95% interval.
const CONFIDENCE_95: f64 = 1.96;

/// Validated experiment parameters, built from command-line input.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl ExperimentConfig {
    /// Accepts signed input so that negative values are reported as invalid
    /// arguments instead of failing to parse.
    pub fn new(grid_size: i64, trials: i64) -> Result<ExperimentConfig> {
        Ok(ExperimentConfig {
            grid_size: positive("grid size", grid_size)?,
            trials: positive("trial count", trials)?,
            seed: None,
            parallel: false,
        })
    }

    pub fn run(&self) -> Result<PercolationStats> {
        match (self.parallel, self.seed) {
            (true, Some(seed)) => PercolationStats::par_new(self.grid_size, self.trials, seed),
            (true, None) => {
                let seed = random::entropy_rng().gen();
                PercolationStats::par_new(self.grid_size, self.trials, seed)
            }
            (false, Some(seed)) => {
                PercolationStats::with_rng(self.grid_size, self.trials, &mut random::create_rng(seed))
            }
            (false, None) => PercolationStats::new(self.grid_size, self.trials),
        }
    }
}

fn positive(what: &str, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::InvalidArgument(format!("{} must be positive, got {}", what, value))),
    }
}

fn validate(grid_size: usize, trials: usize) -> Result<()> {
    if grid_size == 0 {
        return Err(Error::InvalidArgument("grid size must be positive".to_string()));
    }
    if trials == 0 {
        return Err(Error::InvalidArgument("trial count must be positive".to_string()));
    }
    Ok(())
}

/// Runs one trial on a fresh `n`x`n` grid and returns the open fraction at
/// the moment it first percolates.
pub fn run_trial<R: Rng>(n: usize, trial: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = random::uniform(rng, 1, n + 1);
        let col = random::uniform(rng, 1, n + 1);
        if grid.is_open(row, col)? {
            continue;
        }
        grid.open(row, col)?;
    }
    let opened = grid.number_of_open_sites();
    let threshold = opened as f64 / (n * n) as f64;
    debug!("{}", json!({
        "trial": trial,
        "grid_size": n,
        "opened": opened,
        "threshold": threshold,
    }));
    Ok(threshold)
}

#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    results: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` trials on `grid_size`x`grid_size` grids with an
    /// entropy-seeded generator.
    pub fn new(grid_size: usize, trials: usize) -> Result<PercolationStats> {
        PercolationStats::with_rng(grid_size, trials, &mut random::entropy_rng())
    }

    pub fn with_rng<R: Rng>(grid_size: usize, trials: usize, rng: &mut R) -> Result<PercolationStats> {
        validate(grid_size, trials)?;
        info!("running {} trials on a {}x{} grid", trials, grid_size, grid_size);
        let mut results = Vec::with_capacity(trials);
        for t in 0..trials {
            results.push(run_trial(grid_size, t, rng)?);
        }
        let stats = PercolationStats { grid_size, results };
        info!("finished: mean {}, stddev {}", stats.mean(), stats.stddev());
        Ok(stats)
    }

    /// Like [`with_rng`](PercolationStats::with_rng) but spreads the trials
    /// over the rayon pool. Trial `k` draws from its own generator seeded with
    /// `seed + k`, so results do not depend on scheduling.
    pub fn par_new(grid_size: usize, trials: usize, seed: u64) -> Result<PercolationStats> {
        validate(grid_size, trials)?;
        info!("running {} trials on a {}x{} grid in parallel, seed {}",
            trials, grid_size, grid_size, seed);
        let results = (0..trials)
            .into_par_iter()
            .map(|t| {
                let mut rng = random::create_rng(seed.wrapping_add(t as u64));
                run_trial(grid_size, t, &mut rng)
            })
            .collect::<Result<Vec<f64>>>()?;
        let stats = PercolationStats { grid_size, results };
        info!("finished: mean {}, stddev {}", stats.mean(), stats.stddev());
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.results.len()
    }

    /// Per-trial thresholds in trial order.
    pub fn results(&self) -> &[f64] {
        &self.results
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.results)
    }

    /// Sample standard deviation; `NaN` for a single trial.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.results)
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
