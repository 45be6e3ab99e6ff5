use crate::application::dto::ValidationRequest;
use crate::cbom_validation::domain::ValidationReport;

/// CbomValidationPort - Inbound port for the validation use cases
///
/// This port defines the interface that external adapters (CLI, CI glue)
/// use to run a validation batch. Both analyzers implement it, so callers
/// can swap one for the other without touching the surrounding plumbing.
///
/// Validation is infallible at the batch level: per-file problems (missing
/// file, malformed JSON, failed checks) are folded into the report rather
/// than aborting the remaining files.
pub trait CbomValidationPort {
    /// Validates every file in the request and returns the combined report
    ///
    /// # Arguments
    /// * `request` - Request parameters containing input paths and options
    ///
    /// # Returns
    /// A report with one entry per input path, in request order
    fn validate(&self, request: &ValidationRequest) -> ValidationReport;
}
