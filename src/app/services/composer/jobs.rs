use minijinja::context;
use tracing::debug;

use crate::app::services::template_engine::{TemplateEngine, mapping_value};
use crate::domain::template_names::{JOB_BASE_TEMPLATE, job_template};
use crate::domain::{AppError, JobKind, JobSpec, ResolvedArgs};

use super::steps::compose_steps;

/// Render every job, one block per job, in input order.
pub fn compose_jobs(
    jobs: &[JobSpec],
    args: &ResolvedArgs,
    engine: &TemplateEngine,
) -> Result<Vec<String>, AppError> {
    jobs.iter().map(|job| compose_job(job, args, engine)).collect()
}

/// Render a job's steps, then wrap them in `job/base`.
fn compose_job(job: &JobSpec, args: &ResolvedArgs, engine: &TemplateEngine) -> Result<String, AppError> {
    let rendered_steps = match &job.kind {
        JobKind::Custom { blocks } => compose_steps(blocks, args, engine)?,
        JobKind::Template { name } => {
            debug!(template = %name, "rendering job template");
            engine.render(
                &job_template(name),
                context! { job => mapping_value(&job.fields), args => engine.args_value(args) },
            )?
        }
    };

    engine.render(
        JOB_BASE_TEMPLATE,
        context! {
            job => mapping_value(&job.fields),
            rendered_steps => rendered_steps,
            args => engine.args_value(args),
        },
    )
}
