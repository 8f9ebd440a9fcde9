#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the activity-stats binary.
#[macro_export]
macro_rules! activity_stats {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("activity-stats"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local `.activity-stats.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".activity-stats.toml", content);
    }

    /// Path of the history file used by these tests.
    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }

    /// Writes a history document from `(date, seconds)` pairs.
    pub fn write_history(&self, entries: &[(&str, u64)]) {
        let entries: Vec<serde_json::Value> = entries
            .iter()
            .map(|(date, total)| serde_json::json!({ "date": date, "total": total }))
            .collect();
        let doc = serde_json::json!({ "version": 1, "entries": entries });
        fs::write(self.history_path(), doc.to_string()).expect("Failed to write history");
    }

    /// Reads the history file back as JSON.
    pub fn read_history(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.history_path()).expect("Failed to read history");
        serde_json::from_str(&content).expect("History is not valid JSON")
    }

    /// `--history <path>` argument pair.
    pub fn history_args(&self) -> [String; 2] {
        [
            "--history".to_string(),
            self.history_path().to_string_lossy().to_string(),
        ]
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
