//! Output file naming for rendered workflows.

use std::path::{Component, Path};

use super::AppError;
use super::spec::WorkflowSpec;

const OUTPUT_EXTENSION: &str = ".yml";

impl WorkflowSpec {
    /// File name for the rendered document.
    ///
    /// Precedence: explicit `file`, then a slug of `name`, then the
    /// workflow template path flattened with underscores.
    pub fn output_file_name(&self) -> Result<String, AppError> {
        if let Some(file) = self.file.as_deref() {
            validate_relative_file(file)?;
            return Ok(file.to_string());
        }

        if let Some(stem) = self.name.as_deref().map(slugify_name).filter(|stem| !stem.is_empty())
        {
            return Ok(format!("{stem}{OUTPUT_EXTENSION}"));
        }

        if let Some(template) = self.template() {
            return Ok(format!("{}{OUTPUT_EXTENSION}", flatten_template_path(template)));
        }

        Err(AppError::CannotDetermineFilename(self.label()))
    }
}

/// Lower-case, join whitespace runs with `_`, drop non-word characters.
pub fn slugify_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

pub fn flatten_template_path(template: &str) -> String {
    template.trim_matches(|c| c == '/' || c == '\\').replace(['/', '\\'], "_")
}

fn validate_relative_file(file: &str) -> Result<(), AppError> {
    let path = Path::new(file);
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));

    if file.trim().is_empty() || escapes {
        return Err(AppError::invalid_spec(format!(
            "output file '{file}' must be a relative path inside the output directory"
        )));
    }
    Ok(())
}
