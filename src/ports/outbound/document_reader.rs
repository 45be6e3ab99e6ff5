use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for reading CBOM document contents
///
/// This port abstracts the file system operations needed to read a
/// CBOM JSON document from an input path.
pub trait DocumentReader {
    /// Reads the document at the specified path
    ///
    /// # Arguments
    /// * `path` - Path to the CBOM JSON file
    ///
    /// # Returns
    /// The raw content of the document as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file exceeds the document size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_document(&self, path: &Path) -> Result<String>;
}
