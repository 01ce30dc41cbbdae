//! JSON output types for machine-readable CLI output.
//!
//! With `--json` the baker prints exactly one [`BakeReport`] to stdout and no
//! colored progress lines.

use rapidframe_content::{BakeError, ErrorCode};
use serde::{Deserialize, Serialize};

use super::bake::BakeOutcome;

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Offending sheet entry name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            entry: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the sheet entry name for this error.
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

impl From<&BakeError> for JsonError {
    fn from(err: &BakeError) -> Self {
        let json = JsonError::new(err.code().code(), err.to_string());
        match err {
            BakeError::MalformedInput { path, .. } | BakeError::Write { path, .. } => {
                json.with_file(path.display().to_string())
            }
            BakeError::NamingConventionViolation { name, .. } => json.with_entry(name.clone()),
            BakeError::Serialize(_) => json,
        }
    }
}

/// JSON output for the bake command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakeReport {
    /// Whether the bake succeeded
    pub success: bool,
    /// Errors that aborted the bake
    pub errors: Vec<JsonError>,
    /// Bake outcome (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BakeOutcome>,
}

impl BakeReport {
    /// Creates a successful bake report.
    pub fn success(outcome: BakeOutcome) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(outcome),
        }
    }

    /// Creates a failed bake report.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Error for invalid command line usage.
pub fn usage_error(message: impl Into<String>) -> JsonError {
    JsonError::new(ErrorCode::Usage.code(), message)
}
