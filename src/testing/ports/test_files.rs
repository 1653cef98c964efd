//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and the doubles it hands to
/// production code.
///
/// Tests seed input documents via this handle, pass a `MemoryDocumentStore`
/// built from it to the command under test, and inspect written files
/// afterwards through the same handle.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: impl AsRef<Path>, content: &str) {
        self.files.lock().unwrap().insert(path.as_ref().to_path_buf(), content.to_string());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}
