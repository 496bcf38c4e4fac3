use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs can tell a structurally broken BOM apart from a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed and no structural problems were reported
    Success = 0,
    /// Validation reported at least one structural problem
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreachable source, unreadable file, bad config, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM loading and reporting.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("BOM source is unavailable: {source_name}\nDetails: {details}\n\n💡 Hint: Check that the API URL is reachable, or load a local file with --input")]
    SourceUnavailable {
        source_name: String,
        details: String,
    },

    #[error("Failed to parse BOM data from {source_name}\nDetails: {details}\n\n💡 Hint: Expected a JSON array of BOM records or an object with a \"data\" array")]
    SourceParseError {
        source_name: String,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid BOM edge: {reason}")]
    InvalidEdge { reason: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
