//! Error types for bridge class generation.
//!
//! This module provides structured error types using thiserror, split
//! between run-fatal generation errors and grammar-level parse errors
//! that carry the offending source position.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a generation run
#[derive(Error, Debug)]
pub enum BridgeError {
    /// File system errors
    #[error("Failed to read header '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write artifact '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Grammar violations detected while parsing a header
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The root header path does not name a class header
    #[error("'{path}' has no file stem to derive a class name from")]
    InvalidHeaderPath { path: PathBuf },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// General errors for cases with no more specific variant
    #[error("{0}")]
    General(String),
}

impl BridgeError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::InvalidHeaderPath { .. } => "INVALID_HEADER_PATH",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the header (and every base-class header next to it) exists",
                "Base headers are resolved as <same directory>/<BaseName>.<ext>",
            ],
            Self::FileWrite { .. } => vec![
                "Check permissions on the output directory",
                "Use --out-dir to write the artifacts somewhere else",
            ],
            Self::Parse(_) => vec![
                "Generated methods must have a one-token return type and exactly one argument",
                "Move unsupported declarations out of the virtual surface or drop the virtual qualifier",
            ],
            Self::InvalidHeaderPath { .. } => {
                vec!["Pass a path like Foo.h so the class name can be derived from the file stem"]
            }
            Self::Config { .. } => vec![
                "Check bridgegen.toml for syntax errors",
                "Environment overrides use the BRIDGEGEN_ prefix",
            ],
            _ => vec![],
        }
    }
}

/// Grammar violations the signature extractor and class-line matcher detect.
///
/// The recognized grammar is narrow (one return-type token, one argument);
/// anything outside it is reported with the file and line it came from
/// instead of producing a corrupted descriptor.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{path}:{line}: return type must be a single token in '{statement}'")]
    MultiTokenReturnType {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: expected a parameter list in '{statement}'")]
    MissingParameterList {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: unterminated parameter list in '{statement}'")]
    UnterminatedParameterList {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: virtual method must take exactly one argument in '{statement}'")]
    ZeroArguments {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: more than one argument in '{statement}'")]
    MultipleArguments {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: default arguments are not supported in '{statement}'")]
    DefaultArgument {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: parameter needs both a type and a name in '{statement}'")]
    MissingArgumentName {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: malformed method declaration '{statement}'")]
    MalformedSignature {
        path: PathBuf,
        line: u32,
        statement: String,
    },

    #[error("{path}:{line}: malformed class declaration '{statement}'")]
    MalformedClassDecl {
        path: PathBuf,
        line: u32,
        statement: String,
    },
}

/// Result type alias for generation runs
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
