/// Domain models for CBOM validation
///
/// Pure data types with no I/O: the parsed document with its typed field
/// accessors, and the report structures the checkers produce.
mod document;
mod report;

pub use document::{
    is_truthy, scalar_to_string, ArrayField, CbomDocument, Component, Finding, ObjectField,
    Presence, Summary, CBOM_PROPERTY_PREFIX, DEFAULT_ALGORITHM, DEFAULT_RISK, EXPECTED_BOM_FORMAT,
    EXPECTED_SPEC_VERSION, UNNAMED_COMPONENT, VULN_SEVERITIES,
};
pub use report::{FileOutcome, FileReport, MessageSeverity, ValidationMessage, ValidationReport};
