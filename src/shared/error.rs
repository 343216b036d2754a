use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - comparison completed (conflicts may exist but were not gated)
    Success = 0,
    /// Divergent components were found and `--fail-on-conflict` was set
    ConflictsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch error, service error, malformed response, file I/O error, etc.)
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
            ExitCode::ConflictsDetected => write!(f, "Conflicts Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors surfaced by a comparison session.
///
/// Every variant is reported to the caller as a failed operation. Nothing here
/// is retried internally. Callers that need to branch on the kind can
/// `downcast_ref::<CompareError>()` the `anyhow::Error` carrying it.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A document's content could not be read
    #[error("Failed to read document: {document}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    Fetch { document: String, details: String },

    /// The comparison service could not be reached or answered with a non-success status
    #[error("Comparison service request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Please verify that the service is running and the --service-url is correct")]
    Request { endpoint: String, details: String },

    /// The service answered but the payload is not a comparison
    #[error("Malformed comparison response from {endpoint}\nDetails: {details}\n\n💡 Hint: Please verify that the service version matches this client")]
    MalformedResponse { endpoint: String, details: String },

    /// Caller input rejected before any I/O
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl CompareError {
    pub fn validation(message: impl Into<String>) -> Self {
        CompareError::Validation {
            message: message.into(),
        }
    }
}
