//! Test double for `DocumentStore`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DocumentStore;

use super::test_files::TestFiles;

/// In-memory implementation of `DocumentStore` for unit tests.
#[derive(Clone, Debug)]
pub struct MemoryDocumentStore {
    files: TestFiles,
}

impl MemoryDocumentStore {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .read(path)
            .ok_or_else(|| AppError::ConfigNotFound { path: path.display().to_string() })
    }

    fn write_documents(&self, documents: &[(PathBuf, String)]) -> Result<(), AppError> {
        for (path, content) in documents {
            self.files.add(path, content);
        }
        Ok(())
    }
}
