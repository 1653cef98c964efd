//! templater: render CI workflow files from a workflow spec and a template library.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use adapters::{GithubEnvPublisher, LocalFilesystem, TemplateDirectory};
use app::commands::{get_ref as get_ref_command, render as render_command};

pub use app::commands::get_ref::{GetRefOptions, GetRefOutput};
pub use app::commands::render::{RenderOptions, RenderOutput};
pub use domain::{AppError, DuplicateKeys};

/// Render every workflow of the spec file into the output directory.
///
/// Templates are read from `template_location`; nothing is written if any
/// workflow fails to render.
pub fn render(options: RenderOptions) -> Result<RenderOutput, AppError> {
    let store = LocalFilesystem::new();
    let templates = Arc::new(TemplateDirectory::new(options.template_location.clone()));

    render_command::execute(&store, templates, &options)
}

/// Resolve the template ref pinned by the spec file and publish it as
/// `TEMPLATE_PULL_REF` through `GITHUB_ENV` (or stdout outside Actions).
pub fn get_ref(options: GetRefOptions) -> Result<GetRefOutput, AppError> {
    let store = LocalFilesystem::new();
    let publisher = GithubEnvPublisher::from_env();

    get_ref_command::execute(&store, &publisher, &options)
}
