use crate::domain::AppError;

/// Port for exporting a variable to the calling CI environment.
pub trait EnvPublisher {
    fn publish(&self, name: &str, value: &str) -> Result<(), AppError>;
}
