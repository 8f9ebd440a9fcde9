use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::{GoalConfig, HistoryConfig, OutputConfig, RealFileSystem};

/// File system with no config files anywhere.
struct EmptyFileSystem;

impl FileSystem for EmptyFileSystem {
    fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(PathBuf::from("/project"))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        None
    }
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".activity-stats.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_accepts_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "version = \"1\"\n[goal]\ndaily_minutes = 30\n");
    let loader = FileConfigLoader::with_fs(RealFileSystem);

    let checked = run_config_validate_impl(&loader, Some(&path)).unwrap();
    assert_eq!(checked, path.display().to_string());
}

#[test]
fn validate_rejects_bad_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[goal\n");
    let loader = FileConfigLoader::with_fs(RealFileSystem);

    let err = run_config_validate_impl(&loader, Some(&path)).unwrap_err();
    assert_eq!(err.error_type(), "TOML");
}

#[test]
fn validate_rejects_bad_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[goal]\ndaily_minutes = 0\n");
    let loader = FileConfigLoader::with_fs(RealFileSystem);

    let err = run_config_validate_impl(&loader, Some(&path)).unwrap_err();
    assert!(err.to_string().contains("daily_minutes"));
}

#[test]
fn validate_rejects_unknown_version() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "version = \"9\"\n");
    let loader = FileConfigLoader::with_fs(RealFileSystem);

    let err = run_config_validate_impl(&loader, Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version"));
}

#[test]
fn validate_without_any_file_errors() {
    let loader = FileConfigLoader::with_fs(EmptyFileSystem);

    let err = run_config_validate_impl(&loader, None).unwrap_err();
    assert!(err.to_string().contains("No configuration file found"));
}

#[test]
fn show_json_with_no_config_is_default() {
    let cli = Cli::parse_from(["activity-stats", "--no-config", "config", "show"]);

    let output = run_config_show_impl(OutputFormat::Json, &cli).unwrap();
    let parsed: Config = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn show_reads_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[goal]\ndaily_minutes = 45\n");
    let path_arg = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["activity-stats", "--config", &path_arg, "config", "show"]);

    let output = run_config_show_impl(OutputFormat::Text, &cli).unwrap();
    assert!(output.contains("daily_minutes = 45"));
}

#[test]
fn text_shows_defaults() {
    let output = format_config_text(&Config::default());

    assert!(output.starts_with("=== Effective Configuration ==="));
    assert!(output.contains("path = (default)"));
    assert!(output.contains("max_age_days = (keep all)"));
    assert!(output.contains("daily_minutes = (none)"));
    assert!(output.contains("format = text"));
}

#[test]
fn text_shows_configured_values() {
    let config = Config {
        version: None,
        history: HistoryConfig {
            path: Some("/data/history.json".to_string()),
            max_age_days: Some(90),
        },
        goal: GoalConfig {
            daily_minutes: Some(25),
        },
        output: OutputConfig {
            format: OutputFormat::Json,
        },
    };
    let output = format_config_text(&config);

    assert!(output.contains("path = /data/history.json"));
    assert!(output.contains("max_age_days = 90"));
    assert!(output.contains("daily_minutes = 25"));
    assert!(output.contains("format = json"));
}
