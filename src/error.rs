use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range [0, {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    #[error("site ({row}, {col}) outside of a {size}x{size} grid")]
    SiteOutOfRange { row: usize, col: usize, size: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
