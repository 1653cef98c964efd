//! GET_REF mode: decide which template ref the pipeline should fetch.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::app::services::config_loader::load_mapping;
use crate::domain::spec::repo_parameters;
use crate::domain::{AppError, DuplicateKeys, TEMPLATE_REF_VARIABLE, resolve_template_ref};
use crate::ports::{DocumentStore, EnvPublisher};

use super::SCHEMA_VERSION;

#[derive(Debug, Clone)]
pub struct GetRefOptions {
    pub workflow_spec_file: PathBuf,
    pub duplicate_keys: DuplicateKeys,
}

impl Default for GetRefOptions {
    fn default() -> Self {
        Self {
            workflow_spec_file: PathBuf::from("./.github/workflows.yml"),
            duplicate_keys: DuplicateKeys::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetRefOutput {
    pub schema_version: u32,
    pub mode: &'static str,
    pub variable: &'static str,
    pub template_ref: String,
}

/// Resolve the template ref from repo parameters and publish it.
///
/// Only the spec document is read; the defaults live in the template
/// checkout this ref selects.
pub fn execute<D, P>(store: &D, publisher: &P, options: &GetRefOptions) -> Result<GetRefOutput, AppError>
where
    D: DocumentStore + ?Sized,
    P: EnvPublisher + ?Sized,
{
    let root = load_mapping(store, &options.workflow_spec_file, options.duplicate_keys)?;
    let template_ref = resolve_template_ref(&repo_parameters(&root)?)?;

    publisher.publish(TEMPLATE_REF_VARIABLE, &template_ref)?;
    info!(template_ref = %template_ref, "resolved template ref");

    Ok(GetRefOutput {
        schema_version: SCHEMA_VERSION,
        mode: "GET_REF",
        variable: TEMPLATE_REF_VARIABLE,
        template_ref,
    })
}
