use crate::application::dto::ValidationRequest;
use crate::application::use_cases::load_document;
use crate::cbom_validation::domain::{
    FileOutcome, FileReport, ValidationMessage, ValidationReport,
};
use crate::cbom_validation::services::check_document;
use crate::ports::inbound::CbomValidationPort;
use crate::ports::outbound::DocumentReader;
use std::path::Path;

/// CheckSchemaUseCase - CycloneDX 1.6 conformance checking
///
/// Runs the structural conformance checks over each input document. A file
/// fails when any check produced an error, or, in strict mode, when any
/// check produced a warning. A passing file's warnings are not reported.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
pub struct CheckSchemaUseCase<DR> {
    document_reader: DR,
}

impl<DR> CheckSchemaUseCase<DR>
where
    DR: DocumentReader,
{
    /// Creates a new CheckSchemaUseCase with the injected reader
    pub fn new(document_reader: DR) -> Self {
        Self { document_reader }
    }

    fn check_file(&self, path: &Path, strict: bool) -> FileOutcome {
        let doc = match load_document(&self.document_reader, path) {
            Ok(doc) => doc,
            Err(details) => return FileOutcome::ParseFailed(details),
        };

        let messages = check_document(&doc);
        if fails(&messages, strict) {
            FileOutcome::Failed(messages)
        } else {
            FileOutcome::Passed
        }
    }
}

fn fails(messages: &[ValidationMessage], strict: bool) -> bool {
    messages.iter().any(ValidationMessage::is_error)
        || (strict && messages.iter().any(ValidationMessage::is_warning))
}

impl<DR> CbomValidationPort for CheckSchemaUseCase<DR>
where
    DR: DocumentReader,
{
    fn validate(&self, request: &ValidationRequest) -> ValidationReport {
        let files = request
            .files
            .iter()
            .map(|path| FileReport::new(path.clone(), self.check_file(path, request.strict)))
            .collect();
        ValidationReport::new(files)
    }
}
