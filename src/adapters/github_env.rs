//! `EnvPublisher` for GitHub Actions.
//!
//! Appends `NAME=value` to the file named by `GITHUB_ENV` when set, so later
//! steps in the job see the variable. Outside Actions the same line goes to
//! stdout.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::domain::AppError;
use crate::ports::EnvPublisher;

const GITHUB_ENV: &str = "GITHUB_ENV";

#[derive(Debug, Clone, Default)]
pub struct GithubEnvPublisher {
    env_file: Option<PathBuf>,
}

impl GithubEnvPublisher {
    /// Publisher targeting the `GITHUB_ENV` file of the current process, if any.
    pub fn from_env() -> Self {
        Self { env_file: std::env::var_os(GITHUB_ENV).map(PathBuf::from) }
    }

    pub fn with_env_file(env_file: Option<PathBuf>) -> Self {
        Self { env_file }
    }
}

impl EnvPublisher for GithubEnvPublisher {
    fn publish(&self, name: &str, value: &str) -> Result<(), AppError> {
        if value.contains('\n') {
            return Err(AppError::Internal(format!(
                "Refusing to publish multi-line value for {name}"
            )));
        }

        let Some(path) = self.env_file.as_ref() else {
            println!("{name}={value}");
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
            AppError::Internal(format!("Failed to open {GITHUB_ENV} file: {e}"))
        })?;
        writeln!(file, "{name}={value}")
            .map_err(|e| AppError::Internal(format!("Failed to write {GITHUB_ENV} file: {e}")))?;

        info!(variable = name, file = %path.display(), "published environment variable");
        Ok(())
    }
}
