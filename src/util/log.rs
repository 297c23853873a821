// src/util/log.rs

//! File-backed tracing setup. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr.
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

pub const LOG_FILE: &str = "bizedge.log";

/// Creates `log_dir` and truncates the log file, returning its path and handle.
pub fn prepare_log_file(log_dir: &Path) -> std::io::Result<(PathBuf, File)> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = File::create(&path)?;
    Ok((path, file))
}

pub fn level_for(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber. Call once, before the terminal is taken over.
pub fn init(log_dir: &Path, debug: bool) -> color_eyre::Result<PathBuf> {
    let (path, file) = prepare_log_file(log_dir)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level_for(debug))
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install log subscriber: {}", e))?;

    Ok(path)
}
