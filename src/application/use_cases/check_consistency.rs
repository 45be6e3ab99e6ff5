use crate::application::dto::ValidationRequest;
use crate::application::use_cases::load_document;
use crate::cbom_validation::domain::{
    ArrayField, FileOutcome, FileReport, ValidationMessage, ValidationReport,
};
use crate::cbom_validation::services::{aggregate_findings, compare_summary};
use crate::ports::inbound::CbomValidationPort;
use crate::ports::outbound::DocumentReader;
use serde_json::Value;
use std::path::Path;

/// CheckConsistencyUseCase - Summary/findings consistency checking
///
/// For each input document, recomputes the aggregate statistics from the
/// `findings` array and compares them against the self-reported `summary`
/// block. A document with no summary (or an empty one) trivially passes;
/// reported counts must match the recomputed values exactly.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
pub struct CheckConsistencyUseCase<DR> {
    document_reader: DR,
}

impl<DR> CheckConsistencyUseCase<DR>
where
    DR: DocumentReader,
{
    /// Creates a new CheckConsistencyUseCase with the injected reader
    pub fn new(document_reader: DR) -> Self {
        Self { document_reader }
    }

    fn check_file(&self, path: &Path) -> FileOutcome {
        let doc = match load_document(&self.document_reader, path) {
            Ok(doc) => doc,
            Err(details) => return FileOutcome::ParseFailed(details),
        };

        let findings: &[Value] = match doc.findings() {
            ArrayField::Missing => &[],
            ArrayField::NotAnArray => {
                // No point aggregating; this is the only message for the file.
                return FileOutcome::Failed(vec![ValidationMessage::error(
                    "findings is not an array",
                )]);
            }
            ArrayField::Items(items) => items,
        };

        let stats = aggregate_findings(findings);
        let messages = compare_summary(&stats, doc.summary());

        if messages.is_empty() {
            FileOutcome::Passed
        } else {
            FileOutcome::Failed(messages)
        }
    }
}

impl<DR> CbomValidationPort for CheckConsistencyUseCase<DR>
where
    DR: DocumentReader,
{
    fn validate(&self, request: &ValidationRequest) -> ValidationReport {
        let files = request
            .files
            .iter()
            .map(|path| FileReport::new(path.clone(), self.check_file(path)))
            .collect();
        ValidationReport::new(files)
    }
}
