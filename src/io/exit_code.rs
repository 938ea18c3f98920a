//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - generation completed and both artifacts were produced
//! - `1`: General error - unspecified failure
//! - `2`: Usage error - bad command line (clap's own exit code)
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::BridgeError;

/// Standard exit codes for CLI operations.
///
/// These codes follow Unix conventions where 0 indicates success,
/// and non-zero values indicate various error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Generation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Wrong command-line usage (code 2)
    /// Matches the code clap itself exits with on argument errors
    UsageError = 2,

    /// A header violated the recognized grammar (code 4)
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
    /// Convert a `BridgeError` to the appropriate exit code.
    ///
    /// Maps specific error types to semantic exit codes that build
    /// scripts can use to determine appropriate recovery actions.
    pub fn from_error(error: &BridgeError) -> Self {
        match error {
            BridgeError::Parse(_) => ExitCode::ParseError,
            BridgeError::FileRead { .. } | BridgeError::FileWrite { .. } => ExitCode::IoError,
            BridgeError::Config { .. } => ExitCode::ConfigError,
            BridgeError::InvalidHeaderPath { .. } => ExitCode::UsageError,
            BridgeError::General(_) => ExitCode::GeneralError,
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
            ExitCode::UsageError => "Usage error",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
        }
    }
}
