#[macro_use] extern crate log;

mod data;
mod disjoint_set;
mod error;
mod experiment;
mod percolation;
pub mod deque;
pub mod logging;
pub mod random;
pub mod randomized_queue;
pub mod stats;

pub use data::{Direction, Site};
pub use deque::Deque;
pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use experiment::{run_trial, ExperimentConfig, PercolationStats};
pub use percolation::Percolation;
pub use randomized_queue::RandomizedQueue;
