//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Boolean override was not one of `true`, `false`, `1`, `0`.
    #[error("invalid boolean '{value}' for {name}: expected true/false/1/0")]
    InvalidBool { name: &'static str, value: String },

    /// A configured file or directory name was not a single path segment.
    #[error("invalid name '{value}' for {name}: must be a single path segment")]
    InvalidName { name: &'static str, value: String },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
