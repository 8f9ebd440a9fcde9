use std::path::{Path, PathBuf};

use crate::error::{ActivityStatsError, Result};

use super::Config;
use super::model::CONFIG_VERSION;
use super::validation::validate_config_semantics;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".activity-stats.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for activity-stats:
    /// - Windows: `%APPDATA%\activity-stats`
    /// - macOS: `~/Library/Application Support/activity-stats`
    /// - Linux: `~/.config/activity-stats` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "activity-stats")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.activity-stats.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Path of the first config file found in the search order.
    #[must_use]
    pub fn discover(&self) -> Option<PathBuf> {
        if let Ok(cwd) = self.fs.current_dir() {
            let local = cwd.join(LOCAL_CONFIG_NAME);
            if self.fs.exists(&local) {
                return Some(local);
            }
        }

        self.fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path))
    }

    fn parse(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|e| ActivityStatsError::FileAccess {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        let config: Config = toml::from_str(&content)?;
        validate_config_version(&config)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.discover() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                self.parse(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(ActivityStatsError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "loading config");
        self.parse(path)
    }
}

/// Validate config version. Returns an error if the version is unsupported.
fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ActivityStatsError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
