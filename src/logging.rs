//! File logging. The terminal belongs to the game, so log lines go to a file
//! in the platform data directory.

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directory the log file is written to, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_DIR_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

/// Install the global subscriber. Filter comes from `RUST_LOG`, default `info`.
///
/// Returns the log file path, or `None` when logging could not be set up; the
/// game runs either way.
pub fn init() -> Option<PathBuf> {
    let dir = log_dir()?;
    let (path, file) = open_log_file(&dir).ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}

/// Create `dir` if needed and open the log file in it for appending.
fn open_log_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
