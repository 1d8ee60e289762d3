//! Error types for the stub and rule generator.
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum StubGenError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parser initialization errors
    #[error(
        "Failed to initialize PHP parser: {reason}\nSuggestion: Ensure tree-sitter-php is properly installed and the version matches Cargo.toml"
    )]
    ParserInit { reason: String },

    /// The deprecation snapshot has not been collected yet
    #[error(
        "Deprecation snapshot '{path}' is missing or empty.\nSuggestion: Run the collect step first to produce it, then re-run this command"
    )]
    SnapshotMissing { path: PathBuf },

    /// The snapshot exists but is not valid JSON in the expected shape
    #[error("Failed to parse deprecation snapshot '{path}': {source}")]
    SnapshotFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl StubGenError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in structured output
    /// for programmatic error handling.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::SnapshotMissing { .. } => "SNAPSHOT_MISSING",
            Self::SnapshotFormat { .. } => "SNAPSHOT_FORMAT_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}

/// Result type alias for generator operations
pub type StubGenResult<T> = Result<T, StubGenError>;
