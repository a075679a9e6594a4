//! Error types and exit codes for marshrut
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown station, invalid network)

use thiserror::Error;

/// Exit codes reported by the marshrut binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown station, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during marshrut operations
#[derive(Error, Debug)]
pub enum MarshrutError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("station not found: {name}")]
    StationNotFound { name: String },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MarshrutError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MarshrutError::UnknownFormat(_)
            | MarshrutError::DuplicateFormat
            | MarshrutError::UsageError(_) => ExitCode::Usage,

            MarshrutError::StationNotFound { .. } | MarshrutError::InvalidNetwork { .. } => {
                ExitCode::Data
            }

            MarshrutError::Io(_) | MarshrutError::Json(_) | MarshrutError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MarshrutError::UnknownFormat(_) => "unknown_format",
            MarshrutError::DuplicateFormat => "duplicate_format",
            MarshrutError::UsageError(_) => "usage_error",
            MarshrutError::StationNotFound { .. } => "station_not_found",
            MarshrutError::InvalidNetwork { .. } => "invalid_network",
            MarshrutError::Io(_) => "io_error",
            MarshrutError::Json(_) => "json_error",
            MarshrutError::Other(_) => "other",
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

/// Result type alias for marshrut operations
pub type Result<T> = std::result::Result<T, MarshrutError>;
