use crate::shared::error::ExitCode;
use std::path::PathBuf;

/// Severity of a validation message, assigned at creation time.
///
/// Classification is an explicit tag rather than something inferred from the
/// message text, so display code never has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Error,
    Warning,
}

/// One human-readable validation finding for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub severity: MessageSeverity,
    pub text: String,
}

impl ValidationMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Warning,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == MessageSeverity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == MessageSeverity::Warning
    }
}

/// Per-file validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Passed,
    /// The file was parsed but failed its checks; messages are in the order
    /// the checks produced them.
    Failed(Vec<ValidationMessage>),
    /// The file could not be read or was not valid JSON; carries the
    /// underlying decode error text.
    ParseFailed(String),
}

/// Validation result for a single input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: PathBuf, outcome: FileOutcome) -> Self {
        Self { path, outcome }
    }

    pub fn passed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Passed)
    }
}

/// Aggregated result across all input files of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    pub fn new(files: Vec<FileReport>) -> Self {
        Self { files }
    }

    pub fn all_passed(&self) -> bool {
        self.files.iter().all(FileReport::passed)
    }

    /// Process exit code: success only if every file passed.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::Success
        } else {
            ExitCode::ValidationFailed
        }
    }
}
