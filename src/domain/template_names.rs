//! Logical names of templates in the template registry.

/// Wrapper applied to every rendered job.
pub const JOB_BASE_TEMPLATE: &str = "job/base.j2";

/// Wrapper for composed workflow documents.
pub const DOCUMENT_BASE_TEMPLATE: &str = "base.j2";

const TEMPLATE_EXTENSION: &str = ".j2";

pub fn trigger_template(name: &str) -> String {
    format!("trigger/{}{TEMPLATE_EXTENSION}", name.trim_start_matches('/'))
}

pub fn job_template(name: &str) -> String {
    format!("job/{}{TEMPLATE_EXTENSION}", name.trim_start_matches('/'))
}

pub fn workflow_template(name: &str) -> String {
    format!("workflow/{}{TEMPLATE_EXTENSION}", name.trim_start_matches('/'))
}

/// Block fragments are addressed relative to the template root.
pub fn fragment_template(name: &str) -> String {
    format!("{}{TEMPLATE_EXTENSION}", name.trim_start_matches('/'))
}
