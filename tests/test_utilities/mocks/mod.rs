/// Mock implementations for testing
mod mock_document_reader;

pub use mock_document_reader::MockDocumentReader;
