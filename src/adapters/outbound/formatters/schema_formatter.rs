use crate::cbom_validation::domain::{FileOutcome, ValidationReport};
use crate::ports::outbound::ReportFormatter;

/// SchemaReportFormatter - Renders conformance check reports
///
/// One status line per file; a failed file is followed by its messages,
/// each tagged `[ERROR]` or `[WARN]`. In strict mode warnings are promoted
/// to `[ERROR]`, matching the exit behavior where they fail the file.
pub struct SchemaReportFormatter {
    strict: bool,
}

impl SchemaReportFormatter {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl ReportFormatter for SchemaReportFormatter {
    fn format(&self, report: &ValidationReport) -> Vec<String> {
        let mut lines = Vec::new();
        for file in &report.files {
            let path = file.path.display();
            match &file.outcome {
                FileOutcome::Passed => {
                    lines.push(format!("[OK] {}: Valid CycloneDX 1.6 CBOM", path));
                }
                FileOutcome::ParseFailed(details) => {
                    lines.push(format!("[FAIL] {}: Invalid JSON: {}", path, details));
                }
                FileOutcome::Failed(messages) => {
                    lines.push(format!("[FAIL] {}:", path));
                    for message in messages {
                        let prefix = if message.is_error() || self.strict {
                            "[ERROR]"
                        } else {
                            "[WARN]"
                        };
                        lines.push(format!("  {} {}", prefix, message.text));
                    }
                }
            }
        }
        lines
    }
}
