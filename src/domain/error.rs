use std::io;

use thiserror::Error;

/// Library-wide error type for templater operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input document does not exist.
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Input document is not valid YAML or has an unexpected shape.
    #[error("Problem processing config '{path}': {details}")]
    ConfigParse { path: String, details: String },

    /// Workflow spec is well-formed YAML but structurally invalid.
    #[error("Invalid workflow spec: {0}")]
    InvalidSpec(String),

    /// Parameter absent from both repo parameters and defaults.
    #[error("Parameter '{0}' is not defined in repo parameters or defaults")]
    MissingParameter(String),

    /// Named template is not present in the template registry.
    #[error("Template {0} not found!")]
    TemplateNotFound(String),

    /// Template exists but failed to parse or render.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Block is neither a template reference nor a raw block.
    #[error("Not a supported block type: {0}")]
    UnsupportedBlockType(String),

    /// Job is neither `type: custom` nor a template reference.
    #[error("Unknown job type: {0}")]
    UnknownJobType(String),

    /// Workflow has no `file`, `name` or `template` to derive an output name from.
    #[error("Cannot determine output file name for workflow: {0}")]
    CannotDetermineFilename(String),

    /// Template ref is not a valid branch name.
    #[error("Invalid branch name given: {0}")]
    InvalidRef(String),

    /// YAML serialization of a literal fragment failed.
    #[error("YAML serialization error: {0}")]
    YamlSerialize(#[from] serde_yaml::Error),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_spec<S: Into<String>>(message: S) -> Self {
        AppError::InvalidSpec(message.into())
    }
}
