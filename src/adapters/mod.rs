pub mod filesystem;
pub mod github_env;

pub use filesystem::{LocalFilesystem, TemplateDirectory};
pub use github_env::GithubEnvPublisher;
