//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - operation completed
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::StubGenError;

/// Standard exit codes for CLI operations.
///
/// These codes follow Unix conventions where 0 indicates success,
/// and non-zero values indicate various error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Required input not found but the command itself is fine (code 3).
    /// Used for the missing deprecation snapshot so scripts can tell
    /// "collect first" apart from real failures.
    NotFound = 3,

    /// Failed to initialize or run the parser (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `StubGenError` to the appropriate exit code.
    pub fn from_error(error: &StubGenError) -> Self {
        match error {
            StubGenError::SnapshotMissing { .. } => ExitCode::NotFound,
            StubGenError::ParserInit { .. } => ExitCode::ParseError,
            StubGenError::FileRead { .. } | StubGenError::FileWrite { .. } => ExitCode::IoError,
            StubGenError::SnapshotFormat { .. } => ExitCode::ConfigError,
            StubGenError::ConfigError { .. } => ExitCode::ConfigError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Not found",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
        }
    }
}
