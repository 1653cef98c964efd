//! `DocumentStore` implementation backed by the local filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// Reads and writes documents at the paths given, relative to the process
/// working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for LocalFilesystem {
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        debug!(path = %path.display(), "reading document");
        fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::ConfigNotFound { path: path.display().to_string() },
            _ => AppError::Io(err),
        })
    }

    /// Stage every document next to its target, then rename the staged
    /// files into place. A staging failure removes what was staged so far.
    fn write_documents(&self, documents: &[(PathBuf, String)]) -> Result<(), AppError> {
        let mut staged = Vec::with_capacity(documents.len());
        for (path, content) in documents {
            match stage_document(path, content) {
                Ok(staging) => staged.push((staging, path)),
                Err(err) => {
                    for (staging, _) in &staged {
                        let _ = fs::remove_file(staging);
                    }
                    return Err(err);
                }
            }
        }

        for (staging, path) in staged {
            fs::rename(&staging, path)?;
            debug!(path = %path.display(), "wrote document");
        }
        Ok(())
    }
}

fn stage_document(path: &Path, content: &str) -> Result<PathBuf, AppError> {
    let file_name = path.file_name().ok_or_else(|| {
        AppError::Internal(format!("Output path has no file name: {}", path.display()))
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut staging_name = std::ffi::OsString::from(".");
    staging_name.push(file_name);
    staging_name.push(".tmp");
    let staging = path.with_file_name(staging_name);
    fs::write(&staging, content)?;
    Ok(staging)
}
