//! Log file setup
//!
//! The terminal belongs to ratatui, so log records go to a file instead of
//! stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("realty-hub-tui")
}

/// Start logging to `<data dir>/realty-hub-tui/realty-hub.log`; returns the file path.
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join("realty-hub.log");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    Ok(path)
}
