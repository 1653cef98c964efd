use minijinja::context;
use serde_yaml::Value;
use tracing::debug;

use crate::app::services::template_engine::{TemplateEngine, mapping_value};
use crate::domain::template_names::{DOCUMENT_BASE_TEMPLATE, workflow_template};
use crate::domain::{AppError, ResolvedArgs, WorkflowBody, WorkflowSpec};

use super::jobs::compose_jobs;
use super::triggers::compose_triggers;

/// A fully rendered workflow document and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWorkflow {
    pub file_name: String,
    pub content: String,
}

/// Render one workflow entry.
///
/// The output name is derived first so a workflow that cannot be named
/// fails before any template is touched. Workflows with a `template` are
/// rendered from `workflow/<name>` and skip trigger and job composition.
pub fn assemble_workflow(
    workflow: &WorkflowSpec,
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<RenderedWorkflow, AppError> {
    let file_name = workflow.output_file_name()?;

    let content = match &workflow.body {
        WorkflowBody::Delegated { template } => {
            debug!(template = %template, "rendering whole-workflow template");
            engine.render(
                &workflow_template(template),
                context! { workflow => mapping_value(&workflow.fields), args => engine.args_value(args) },
            )?
        }
        WorkflowBody::Composed { triggers, jobs } => {
            let trigger_text = compose_triggers(triggers, args, engine)?;
            let job_texts = compose_jobs(jobs, args, engine)?;
            compose_document(workflow, &trigger_text, &job_texts, args, engine)?
        }
    };

    Ok(RenderedWorkflow { file_name, content })
}

/// Render `base` with the composed trigger and job text in place of the
/// workflow's `triggers` and `jobs` entries.
pub fn compose_document(
    workflow: &WorkflowSpec,
    trigger_text: &str,
    job_texts: &[String],
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<String, AppError> {
    let mut fields = workflow.fields.clone();
    fields.insert(Value::from("triggers"), Value::from(trigger_text));
    fields.insert(Value::from("jobs"), Value::from(job_texts.concat().trim_matches('\n')));

    engine.render(
        DOCUMENT_BASE_TEMPLATE,
        context! { workflow => mapping_value(&fields), args => engine.args_value(args) },
    )
}
