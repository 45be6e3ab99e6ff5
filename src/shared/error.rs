use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI applications.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every input file passed its checks
    Success = 0,
    /// One or more files failed validation or could not be parsed
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (output failure, unrecoverable runtime fault)
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

/// Application-specific errors for CBOM validation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Per-file conditions (invalid JSON, consistency mismatches, conformance
/// violations) are not represented here: those are recovered at file
/// granularity and reported through the validation report instead of
/// aborting the batch.
#[derive(Debug, Error)]
pub enum CbomError {
    #[error("Failed to read CBOM file {path}: {details}")]
    DocumentReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}: {reason}")]
    SecurityError { path: PathBuf, reason: String },

    #[error("Failed to write report to stdout: {details}")]
    PresentationError { details: String },
}
