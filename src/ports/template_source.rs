//! Template registry lookup.

use crate::domain::AppError;

/// Port for loading template sources by logical name (e.g. `job/build.j2`).
///
/// Implementations are shared with the template engine's loader and must be
/// usable from any thread.
pub trait TemplateSource: Send + Sync {
    /// Load a template's source text, or `None` when the registry has no
    /// template under that name.
    fn load_template(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Human-readable location of a template, used in not-found diagnostics.
    fn describe(&self, name: &str) -> String {
        name.to_string()
    }
}
