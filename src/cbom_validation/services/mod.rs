/// Domain services - the two analyzers and their shared aggregation pass
pub mod aggregator;
pub mod comparator;
pub mod schema;

pub use aggregator::{aggregate_findings, FindingStats};
pub use comparator::compare_summary;
pub use schema::check_document;
