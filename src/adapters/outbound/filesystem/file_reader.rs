use crate::ports::outbound::DocumentReader;
use crate::shared::error::CbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading CBOM documents from the file system
///
/// This adapter implements the DocumentReader port with security checks:
/// symlinks are rejected, non-regular files are rejected, and oversized
/// files are refused before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_document(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "CBOM document")?;

        // symlink_metadata again so a swap between checks cannot follow a link
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read CBOM document metadata: {}", e))?;
        validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read CBOM document: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        self.safe_read_document(path).map_err(|e| {
            CbomError::DocumentReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
