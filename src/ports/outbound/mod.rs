/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod document_reader;
pub mod report_formatter;
pub mod report_presenter;

pub use document_reader::DocumentReader;
pub use report_formatter::ReportFormatter;
pub use report_presenter::ReportPresenter;
