//! Layered, read-only view over repo parameters and global defaults.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_yaml::{Mapping, Value};

use super::AppError;
use super::yaml::value_repr;

/// Parameter lookup where repo-supplied values shadow defaults.
///
/// The two layers are never merged into a single mapping; every lookup
/// consults the repo layer first and falls back to the defaults layer.
/// A repo value replaces the default wholesale, including nested mappings.
#[derive(Debug, Clone, Default)]
pub struct ResolvedArgs {
    repo: Arc<Mapping>,
    defaults: Arc<Mapping>,
}

impl ResolvedArgs {
    pub fn new(repo: Mapping, defaults: Mapping) -> Self {
        Self { repo: Arc::new(repo), defaults: Arc::new(defaults) }
    }

    /// Look up a parameter, failing when neither layer defines it.
    pub fn resolve(&self, key: &str) -> Result<&Value, AppError> {
        self.get(key).ok_or_else(|| AppError::MissingParameter(key.to_string()))
    }

    /// Look up a parameter, returning `None` when neither layer defines it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.repo.get(key).or_else(|| self.defaults.get(key))
    }

    /// Union of parameter names across both layers.
    ///
    /// Non-string keys are reported by their YAML representation.
    pub fn keys(&self) -> BTreeSet<String> {
        self.repo.keys().chain(self.defaults.keys()).map(key_name).collect()
    }
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        other => value_repr(other),
    }
}
