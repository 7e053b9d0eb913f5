//! Log setup for the binary.
//!
//! The terminal belongs to the game frame, so records go to a file in the
//! OS temp directory instead of stderr.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Default log file location.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("blockfall.log")
}

/// Build the dispatcher without installing it.
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    let started = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:>8.3}s {:<5} {}] {}",
                started.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
}

/// Install a file logger at `path`.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = fern::log_file(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    dispatch(level)
        .chain(file)
        .apply()
        .context("installing logger")?;
    Ok(())
}
