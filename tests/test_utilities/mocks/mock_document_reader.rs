use cbom_validator::prelude::*;
use std::path::Path;

/// Mock DocumentReader for testing
///
/// Serves the same content for every path, or fails every read.
pub struct MockDocumentReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, _path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        Ok(self.content.clone())
    }
}
