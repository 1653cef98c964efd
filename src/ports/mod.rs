mod document_store;
mod env_publisher;
mod template_source;

pub use document_store::DocumentStore;
pub use env_publisher::EnvPublisher;
pub use template_source::TemplateSource;
