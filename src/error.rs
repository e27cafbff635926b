//! Error types for daily-readings

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the daily-readings application
#[derive(Debug, Error)]
pub enum ReadingsError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not readable: {0}")]
    ConfigNotFound(PathBuf),

    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },

    #[error("Parse error for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ReadingsError {
    pub(crate) fn http(url: &str, err: impl std::fmt::Display) -> Self {
        ReadingsError::Http {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(url: &str, err: impl std::fmt::Display) -> Self {
        ReadingsError::Parse {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadingsError::Config(_)
            | ReadingsError::ConfigNotFound(_)
            | ReadingsError::TomlDeserialize(_) => 2,
            ReadingsError::InvalidDate(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ReadingsError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • next sunday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2026-01-01)\n\n\
                    Examples:\n\
                    daily-readings today\n\
                    daily-readings next sunday\n\
                    daily-readings 2026-01-01",
                    input
                )
            }
            ReadingsError::ConfigNotFound(path) => {
                format!(
                    "Configuration file not readable: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset DAILY_READINGS_CONFIG to use the built-in defaults",
                    path.display()
                )
            }
            ReadingsError::Http { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • Raise timeout_secs in the configuration file",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ReadingsError
pub type Result<T> = std::result::Result<T, ReadingsError>;
