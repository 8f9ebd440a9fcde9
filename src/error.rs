use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityStatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Invalid activity document: {0}")]
    InvalidDocument(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ActivityStatsError {
    /// Short category name used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::InvalidRecord { .. } => "InvalidRecord",
            Self::InvalidDocument(_) => "InvalidDocument",
            Self::InvalidDate(_) => "InvalidDate",
            Self::InvalidDuration(_) => "InvalidDuration",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
        }
    }

    /// One-line message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::InvalidDocument(msg)
            | Self::InvalidDate(msg)
            | Self::InvalidDuration(msg) => msg.clone(),
            Self::FileAccess { path, source } => {
                format!("{} ({:?})", path.display(), source.kind())
            }
            Self::InvalidRecord { index, message } => format!("record {index}: {message}"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::Json(e) => e.to_string(),
        }
    }

    /// Underlying cause, when one exists.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityStatsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
