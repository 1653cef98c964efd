mod memory_document_store;
mod memory_template_source;
mod recording_env_publisher;
mod test_files;

pub use self::memory_document_store::MemoryDocumentStore;
pub use self::memory_template_source::MemoryTemplateSource;
pub use self::recording_env_publisher::RecordingEnvPublisher;
pub use self::test_files::TestFiles;
