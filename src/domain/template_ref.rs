//! Template source ref selection and branch-name validation.

use serde_yaml::{Mapping, Value};

use super::AppError;
use super::yaml::value_repr;

/// Ref used when the repo does not pin `template_ref`.
pub const DEFAULT_TEMPLATE_REF: &str = "master";

/// Environment variable the resolved ref is published under.
pub const TEMPLATE_REF_VARIABLE: &str = "TEMPLATE_PULL_REF";

const TEMPLATE_REF_KEY: &str = "template_ref";

/// Pick the template ref from repo-level parameters and validate it.
pub fn resolve_template_ref(repo_parameters: &Mapping) -> Result<String, AppError> {
    let candidate = match repo_parameters.get(TEMPLATE_REF_KEY) {
        None => DEFAULT_TEMPLATE_REF.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => return Err(AppError::InvalidRef(value_repr(other))),
    };

    if !is_valid_branch_name(&candidate) {
        return Err(AppError::InvalidRef(candidate));
    }
    Ok(candidate)
}

/// Branch-name grammar compatible with `git check-ref-format --branch`.
pub fn is_valid_branch_name(name: &str) -> bool {
    if name.is_empty() || name == "@" {
        return false;
    }
    if name.starts_with('/') || name.ends_with('/') || name.ends_with('.') {
        return false;
    }
    if name.ends_with(".lock") {
        return false;
    }
    if name.contains("..") || name.contains("//") || name.contains("@{") {
        return false;
    }
    if name.split('/').any(|segment| segment.starts_with('.')) {
        return false;
    }
    !name.chars().any(is_forbidden_char)
}

fn is_forbidden_char(c: char) -> bool {
    c.is_ascii_control() || matches!(c, ' ' | '~' | '^' | ':' | '?' | '*' | '[' | '\\')
}
