//! Error types for content decoding and baking.

use std::path::PathBuf;

use thiserror::Error;

/// Stable error codes surfaced in machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E000: Command line arguments were missing or invalid
    Usage,
    /// E001: Input file missing, unreadable, or not valid JSON
    MalformedInput,
    /// E002: Sheet entry name does not follow the naming convention
    NamingConventionViolation,
    /// E003: Output file could not be written
    Write,
    /// E004: Document could not be serialized
    Serialize,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Usage => "E000",
            ErrorCode::MalformedInput => "E001",
            ErrorCode::NamingConventionViolation => "E002",
            ErrorCode::Write => "E003",
            ErrorCode::Serialize => "E004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that abort a bake.
#[derive(Debug, Error)]
pub enum BakeError {
    /// An input file is missing, unreadable, or has the wrong shape.
    #[error("malformed input '{}': {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// A sheet entry name does not match `<identifier><digits>.ase`.
    #[error("naming convention violation for '{name}': {reason}")]
    NamingConventionViolation { name: String, reason: String },

    /// An output artifact could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BakeError {
    /// Creates a malformed input error for the given path.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BakeError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BakeError::MalformedInput { .. } => ErrorCode::MalformedInput,
            BakeError::NamingConventionViolation { .. } => ErrorCode::NamingConventionViolation,
            BakeError::Write { .. } => ErrorCode::Write,
            BakeError::Serialize(_) => ErrorCode::Serialize,
        }
    }
}
