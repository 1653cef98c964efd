//! RENDER mode: expand every workflow of the spec into an output file.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::app::services::composer::{RenderedWorkflow, assemble_workflow};
use crate::app::services::config_loader::load_mapping;
use crate::app::services::template_engine::TemplateEngine;
use crate::domain::{AppError, DuplicateKeys, ResolvedArgs, SpecDocument};
use crate::ports::{DocumentStore, TemplateSource};

use super::SCHEMA_VERSION;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Root of the template checkout.
    pub template_location: PathBuf,
    pub defaults_file: PathBuf,
    pub workflow_spec_file: PathBuf,
    /// Directory rendered workflows are written into.
    pub output_location: PathBuf,
    pub duplicate_keys: DuplicateKeys,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template_location: PathBuf::from("./tmp/template/"),
            defaults_file: PathBuf::from("./tmp/defaults.yml"),
            workflow_spec_file: PathBuf::from("./.github/workflows.yml"),
            output_location: PathBuf::from("./.github/workflows/"),
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

/// Summary of a successful render run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    pub schema_version: u32,
    pub mode: &'static str,
    pub output_dir: String,
    /// Output file names relative to `output_dir`, in spec order and
    /// listed once even when several workflows target the same file.
    pub files: Vec<String>,
}

/// Render all workflows, then write them as one batch.
///
/// Nothing is written unless every workflow renders and every output can be
/// staged.
pub fn execute<D: DocumentStore + ?Sized>(
    store: &D,
    templates: Arc<dyn TemplateSource>,
    options: &RenderOptions,
) -> Result<RenderOutput, AppError> {
    let spec_root = load_mapping(store, &options.workflow_spec_file, options.duplicate_keys)?;
    let spec = SpecDocument::parse(&spec_root)?;
    let defaults = load_mapping(store, &options.defaults_file, options.duplicate_keys)?;

    let args = ResolvedArgs::new(spec.parameters.clone(), defaults);
    info!(
        workflows = spec.workflows.len(),
        parameters = args.keys().len(),
        "loaded workflow spec"
    );

    let engine = TemplateEngine::new(templates)?;
    let rendered = spec
        .workflows
        .iter()
        .map(|workflow| {
            let output = assemble_workflow(workflow, &args, &engine)?;
            info!(workflow = %workflow.label(), file = %output.file_name, "rendered workflow");
            Ok(output)
        })
        .collect::<Result<Vec<RenderedWorkflow>, AppError>>()?;

    let mut files: Vec<String> = Vec::with_capacity(rendered.len());
    let mut documents: Vec<(PathBuf, String)> = Vec::with_capacity(rendered.len());
    for workflow in rendered {
        match files.iter().position(|file| *file == workflow.file_name) {
            Some(index) => {
                warn!(file = %workflow.file_name, "output file produced by more than one workflow; last one wins");
                documents[index].1 = workflow.content;
            }
            None => {
                documents.push((options.output_location.join(&workflow.file_name), workflow.content));
                files.push(workflow.file_name);
            }
        }
    }

    store.write_documents(&documents)?;
    for (path, _) in &documents {
        info!(path = %path.display(), "wrote workflow");
    }

    Ok(RenderOutput {
        schema_version: SCHEMA_VERSION,
        mode: "RENDER",
        output_dir: options.output_location.display().to_string(),
        files,
    })
}
