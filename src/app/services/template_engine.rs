//! Shared minijinja environment for rendering workflow templates.
//!
//! Built once per run and passed by reference to every composer. Templates
//! use `{* expr *}` for variables so that GitHub Actions `${{ expr }}`
//! expressions pass through untouched; `{% %}` and `{# #}` keep their usual
//! meaning.

use std::sync::{Arc, Mutex};

use minijinja::syntax::SyntaxConfig;
use minijinja::value::{Enumerator, Object, ObjectRepr};
use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use serde_yaml::Mapping;
use tracing::debug;

use crate::domain::{AppError, ResolvedArgs};
use crate::ports::TemplateSource;

/// Helper function for templates to output GitHub Actions expressions.
/// Usage in template: {* gha_expr("github.ref") *} → ${{ github.ref }}
fn gha_expr(expr: &str) -> String {
    format!("${{{{ {} }}}}", expr)
}

pub struct TemplateEngine {
    env: Environment<'static>,
    source: Arc<dyn TemplateSource>,
    /// Last `args` key that missed both layers during the current render.
    missing_arg: Arc<Mutex<Option<String>>>,
}

impl TemplateEngine {
    pub fn new(source: Arc<dyn TemplateSource>) -> Result<Self, AppError> {
        let mut env = Environment::new();

        let syntax = SyntaxConfig::builder()
            .variable_delimiters("{*", "*}")
            .build()
            .map_err(|e| AppError::Internal(format!("Invalid template syntax config: {}", e)))?;
        env.set_syntax(syntax);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);

        env.add_function("gha_expr", |expr: &str| -> String { gha_expr(expr) });

        let loader_source = Arc::clone(&source);
        env.set_loader(move |name| {
            loader_source.load_template(name).map_err(|e| {
                minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    format!("Failed to load template '{}': {}", name, e),
                )
            })
        });

        Ok(Self { env, source, missing_arg: Arc::default() })
    }

    /// Render a registry template by name.
    pub fn render(&self, template_name: &str, ctx: Value) -> Result<String, AppError> {
        debug!(template = template_name, "rendering template");
        self.forget_missing_arg();
        let template = self.env.get_template(template_name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                AppError::TemplateNotFound(self.source.describe(template_name))
            } else {
                self.render_error(template_name, &e)
            }
        })?;

        template.render(ctx).map_err(|e| self.render_error(template_name, &e))
    }

    /// Render template source that does not live in the registry.
    pub fn render_inline(&self, label: &str, source: &str, ctx: Value) -> Result<String, AppError> {
        self.forget_missing_arg();
        self.env.render_str(source, ctx).map_err(|e| self.render_error(label, &e))
    }

    /// Expose resolved parameters to templates without merging the layers.
    pub fn args_value(&self, args: &ResolvedArgs) -> Value {
        Value::from_object(TemplateArgs {
            args: args.clone(),
            missing: Arc::clone(&self.missing_arg),
        })
    }

    fn forget_missing_arg(&self) {
        if let Ok(mut slot) = self.missing_arg.lock() {
            *slot = None;
        }
    }

    /// Printing an undefined value right after an `args` miss is reported as
    /// that missing parameter.
    fn render_error(&self, template_name: &str, err: &minijinja::Error) -> AppError {
        if err.kind() == ErrorKind::UndefinedError {
            let missing = self.missing_arg.lock().ok().and_then(|mut slot| slot.take());
            if let Some(key) = missing {
                debug!(template = template_name, parameter = %key, "missing parameter");
                return AppError::MissingParameter(key);
            }
        }
        AppError::TemplateRender { template: template_name.to_string(), details: format!("{:#}", err) }
    }
}

/// Expose a mapping from the spec document to templates.
pub fn mapping_value(mapping: &Mapping) -> Value {
    Value::from_serialize(mapping)
}

/// `args` as templates see it.
#[derive(Debug)]
struct TemplateArgs {
    args: ResolvedArgs,
    missing: Arc<Mutex<Option<String>>>,
}

impl Object for TemplateArgs {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Map
    }

    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match self.args.resolve(key.as_str()?) {
            Ok(value) => Some(Value::from_serialize(value)),
            Err(AppError::MissingParameter(name)) => {
                if let Ok(mut slot) = self.missing.lock() {
                    *slot = Some(name);
                }
                None
            }
            Err(_) => None,
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(self.args.keys().into_iter().map(Value::from).collect())
    }
}
