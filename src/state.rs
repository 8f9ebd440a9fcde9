//! State file path resolution and atomic writes.
//!
//! The activity history lives in the platform data directory
//! (`~/.local/share/activity-stats/history.json` on Linux). When no data
//! directory can be determined, it falls back to `.activity-stats/` in the
//! current directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const APP_NAME: &str = "activity-stats";
const FALLBACK_STATE_DIR: &str = ".activity-stats";
const HISTORY_FILENAME: &str = "history.json";
const TEMP_SUFFIX: &str = "tmp";

/// Directory holding the activity history.
#[must_use]
pub fn state_dir() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME).map_or_else(
        || PathBuf::from(FALLBACK_STATE_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Default history file path, used when neither `--history` nor
/// `history.path` in the config names one.
#[must_use]
pub fn default_history_path() -> PathBuf {
    state_dir().join(HISTORY_FILENAME)
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Path of the sibling temp file used while writing `path`.
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".");
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Write `contents` to `path` atomically: write and sync a sibling temp
/// file, then rename it over the target.
///
/// The original file is left untouched if any step fails.
///
/// # Errors
/// Returns an error if the parent directory, temp file or rename fails.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let temp_path = temp_path_for(path);

    let result = write_synced(&temp_path, contents).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
