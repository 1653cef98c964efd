//! Document I/O for spec, defaults and rendered output files.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for reading input documents and writing rendered workflows.
pub trait DocumentStore {
    /// Read a document as UTF-8 text.
    ///
    /// A missing file is reported as `AppError::ConfigNotFound`.
    fn read_document(&self, path: &Path) -> Result<String, AppError>;

    /// Write a batch of documents, creating parent directories and replacing
    /// existing files. No target is touched unless every document could be
    /// staged.
    fn write_documents(&self, documents: &[(PathBuf, String)]) -> Result<(), AppError>;
}
