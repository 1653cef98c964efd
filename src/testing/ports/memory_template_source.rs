//! Test double for `TemplateSource`.

use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Template registry held in memory, keyed by logical template name.
#[derive(Clone, Debug, Default)]
pub struct MemoryTemplateSource {
    templates: HashMap<String, String>,
}

impl MemoryTemplateSource {
    pub fn with_templates(templates: &[(&str, &str)]) -> Self {
        Self {
            templates: templates
                .iter()
                .map(|(name, source)| (name.to_string(), source.to_string()))
                .collect(),
        }
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn load_template(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.templates.get(name).cloned())
    }
}
