//! Composition of rendered workflow documents.
//!
//! Each composer turns one level of the typed spec into text:
//! triggers, block lists, jobs and finally the whole document. Output order
//! always mirrors input order because fragments are concatenated as text.

mod jobs;
mod steps;
mod triggers;
mod workflow;

pub use jobs::compose_jobs;
pub use steps::compose_steps;
pub use triggers::compose_triggers;
pub use workflow::{RenderedWorkflow, assemble_workflow, compose_document};
