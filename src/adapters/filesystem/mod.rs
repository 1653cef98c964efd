//! Filesystem adapters for document and template ports.
//!
//! `LocalFilesystem` reads input documents and writes rendered workflows.
//! `TemplateDirectory` serves templates from a directory and refuses names
//! that would escape it.

mod document_store;
mod template_directory;

pub use document_store::LocalFilesystem;
pub use template_directory::TemplateDirectory;
