use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::EnvPublisher;

/// Records published variables instead of touching the process environment.
#[derive(Default)]
pub struct RecordingEnvPublisher {
    pub published: RefCell<Vec<(String, String)>>,
}

impl RecordingEnvPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(String, String)> {
        self.published.borrow().clone()
    }
}

impl EnvPublisher for RecordingEnvPublisher {
    fn publish(&self, name: &str, value: &str) -> Result<(), AppError> {
        self.published.borrow_mut().push((name.to_string(), value.to_string()));
        Ok(())
    }
}
