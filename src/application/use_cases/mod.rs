/// Use cases module containing application business logic orchestration
mod check_consistency;
mod check_schema;

pub use check_consistency::CheckConsistencyUseCase;
pub use check_schema::CheckSchemaUseCase;

use crate::cbom_validation::domain::CbomDocument;
use crate::ports::outbound::DocumentReader;
use std::path::Path;

/// Reads and parses one document, folding read and decode failures into a
/// single per-file failure message so the rest of the batch keeps running.
fn load_document<DR: DocumentReader>(
    reader: &DR,
    path: &Path,
) -> std::result::Result<CbomDocument, String> {
    let content = reader.read_document(path).map_err(|e| e.to_string())?;
    CbomDocument::from_json(&content).map_err(|e| e.to_string())
}
