use crate::cbom_validation::domain::{FileOutcome, ValidationReport};
use crate::ports::outbound::ReportFormatter;

/// ConsistencyReportFormatter - Renders consistency check reports
///
/// One status line per file; a failed file is followed by its mismatch
/// messages as indented bullets. This line format is stable and parsed
/// by CI scripts, so changes here are breaking.
pub struct ConsistencyReportFormatter;

impl ConsistencyReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsistencyReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ConsistencyReportFormatter {
    fn format(&self, report: &ValidationReport) -> Vec<String> {
        let mut lines = Vec::new();
        for file in &report.files {
            let path = file.path.display();
            match &file.outcome {
                FileOutcome::Passed => {
                    lines.push(format!("[OK] {}: summary matches findings", path));
                }
                FileOutcome::ParseFailed(details) => {
                    lines.push(format!("[FAIL] {}: invalid JSON: {}", path, details));
                }
                FileOutcome::Failed(messages) => {
                    lines.push(format!("[FAIL] {}:", path));
                    for message in messages {
                        lines.push(format!("  - {}", message.text));
                    }
                }
            }
        }
        lines
    }
}
