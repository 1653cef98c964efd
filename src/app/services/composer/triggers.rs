use minijinja::context;
use tracing::debug;

use crate::app::services::template_engine::{TemplateEngine, mapping_value};
use crate::domain::template_names::trigger_template;
use crate::domain::yaml::dump_fragment;
use crate::domain::{AppError, ResolvedArgs, TriggerSpec};

/// Render the `triggers` section of a workflow.
///
/// Literal triggers are dumped as YAML in input key order. A trigger mapping
/// carrying `template` is delegated as a whole to `trigger/<name>`, which
/// receives the full mapping as `triggers`.
pub fn compose_triggers(
    triggers: &TriggerSpec,
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<String, AppError> {
    let rendered = match triggers {
        TriggerSpec::Literal(value) => dump_fragment(value)?,
        TriggerSpec::Template { name, fields } => {
            debug!(template = %name, "rendering trigger template");
            engine.render(
                &trigger_template(name),
                context! { triggers => mapping_value(fields), args => engine.args_value(args) },
            )?
        }
    };
    Ok(rendered.trim_matches('\n').to_string())
}
