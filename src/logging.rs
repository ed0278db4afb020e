use std::fs::File;
use std::path::Path;

use simplelog::*;

use crate::error::Result;

/// Maps a `-v` count to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs a stderr logger at `level` and, when `log_file` is given, a
/// second logger writing debug records into that file.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, config.clone(), TerminalMode::Stderr, ColorChoice::Auto),
    ];
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
