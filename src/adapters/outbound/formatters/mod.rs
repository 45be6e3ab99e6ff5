/// Report formatters for the two analyzers' output grammars
mod consistency_formatter;
mod schema_formatter;

pub use consistency_formatter::ConsistencyReportFormatter;
pub use schema_formatter::SchemaReportFormatter;
