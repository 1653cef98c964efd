//! `TemplateSource` implementation over a template checkout directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Templates stored as files below a root directory, addressed by their
/// relative path (e.g. `job/build.j2`).
#[derive(Debug, Clone)]
pub struct TemplateDirectory {
    root: PathBuf,
}

impl TemplateDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a template name below the root as configured, or `None` if
    /// the name could leave it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name.trim_start_matches('/'));
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        stays_inside.then(|| self.root.join(relative))
    }
}

impl TemplateSource for TemplateDirectory {
    fn load_template(&self, name: &str) -> Result<Option<String>, AppError> {
        let Some(path) = self.resolve(name) else {
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
                Ok(None)
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn describe(&self, name: &str) -> String {
        self.root.join(name.trim_start_matches('/')).display().to_string()
    }
}
