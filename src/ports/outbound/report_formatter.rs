use crate::cbom_validation::domain::ValidationReport;

/// ReportFormatter port for rendering validation reports
///
/// This port abstracts the line-oriented rendering of a report. Each
/// analyzer has its own formatter because the two tools have different
/// report grammars.
pub trait ReportFormatter {
    /// Renders the report as the lines the tool prints, in order
    fn format(&self, report: &ValidationReport) -> Vec<String>;
}
