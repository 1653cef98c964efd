pub mod error;
pub mod output_name;
pub mod parameters;
pub mod spec;
pub mod template_names;
pub mod template_ref;
pub mod yaml;

pub use error::AppError;
pub use parameters::ResolvedArgs;
pub use spec::{
    BlockKind, BlockSpec, JobKind, JobSpec, SpecDocument, TriggerSpec, WorkflowBody, WorkflowSpec,
};
pub use template_ref::{DEFAULT_TEMPLATE_REF, TEMPLATE_REF_VARIABLE, resolve_template_ref};
pub use yaml::DuplicateKeys;
