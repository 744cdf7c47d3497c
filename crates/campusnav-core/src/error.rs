//! Error types and exit codes for campusnav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid edge weights)
//! - 3: Data error (unknown location, no connecting path, malformed dataset)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the campusnav CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, no path, bad dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campusnav operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid edge weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { value: String },

    // Data errors (exit code 3)
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    #[error("no path exists between {start} and {end}")]
    NoPathExists { start: String, end: String },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for a location missing from the graph
    pub fn unknown_location(name: impl std::fmt::Display) -> Self {
        CampusError::UnknownLocation {
            name: name.to_string(),
        }
    }

    /// Create an error for two locations with no connecting path
    pub fn no_path(start: impl std::fmt::Display, end: impl std::fmt::Display) -> Self {
        CampusError::NoPathExists {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Create an error for an edge weight Dijkstra cannot handle
    pub fn invalid_weight(value: impl std::fmt::Display) -> Self {
        CampusError::InvalidWeight {
            value: value.to_string(),
        }
    }

    /// Create an error for a dataset that cannot be loaded
    pub fn invalid_dataset(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CampusError::InvalidDataset {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            CampusError::UnknownFormat(_)
            | CampusError::UsageError(_)
            | CampusError::InvalidWeight { .. } => ExitCode::Usage,

            // Data errors
            CampusError::UnknownLocation { .. }
            | CampusError::NoPathExists { .. }
            | CampusError::InvalidDataset { .. } => ExitCode::Data,

            // Generic failures
            CampusError::Io(_) | CampusError::Json(_) | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownFormat(_) => "unknown_format",
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidWeight { .. } => "invalid_weight",
            CampusError::UnknownLocation { .. } => "unknown_location",
            CampusError::NoPathExists { .. } => "no_path_exists",
            CampusError::InvalidDataset { .. } => "invalid_dataset",
            CampusError::Io(_) => "io_error",
            CampusError::Json(_) => "json_error",
            CampusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campusnav operations
pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CampusError::unknown_location("Union South").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            CampusError::no_path("A", "B").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            CampusError::invalid_weight(-1.5).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CampusError::UnknownFormat("yaml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CampusError::invalid_dataset("campus.txt", "not a .dot file").exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = CampusError::unknown_location("Bascom Hall");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_location");
        assert_eq!(json["error"]["message"], "unknown location: Bascom Hall");
    }

    #[test]
    fn test_no_path_message() {
        let err = CampusError::no_path("E", "A");
        assert_eq!(err.to_string(), "no path exists between E and A");
    }
}
