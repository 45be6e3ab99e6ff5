use std::path::PathBuf;

/// ValidationRequest - Request DTO for the validation use cases
///
/// Carries the input paths and the options shared by both analyzers.
/// Files are validated in the given order and each gets its own entry
/// in the report.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// Paths to the CBOM JSON documents to validate
    pub files: Vec<PathBuf>,
    /// Whether warnings fail a file (schema conformance only; the
    /// consistency checker produces no warnings and ignores this)
    pub strict: bool,
}

impl ValidationRequest {
    pub fn new(files: Vec<PathBuf>, strict: bool) -> Self {
        Self { files, strict }
    }
}
