//! Typed workflow spec, parsed from the loaded YAML document.
//!
//! Parsing validates the loose YAML records once and produces closed
//! variants, so composers match on `TriggerSpec`, `JobKind` and `BlockKind`
//! instead of probing keys. The source mappings are kept alongside the
//! typed data because templates receive them verbatim as render context.

use serde_yaml::{Mapping, Value};

use super::AppError;
use super::yaml::value_repr;

const PARAMETERS_KEY: &str = "parameters";
const WORKFLOWS_KEY: &str = "workflows";
const TEMPLATE_KEY: &str = "template";
const TEMPLATE_ARGS_KEY: &str = "template_args";
const TYPE_KEY: &str = "type";
const CUSTOM_JOB_TYPE: &str = "custom";
const RAW_BLOCK_TYPE: &str = "raw";

/// Top-level workflow spec document.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    pub parameters: Mapping,
    pub workflows: Vec<WorkflowSpec>,
}

impl SpecDocument {
    pub fn parse(root: &Mapping) -> Result<Self, AppError> {
        let parameters = repo_parameters(root)?;

        let workflows = match root.get(WORKFLOWS_KEY) {
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| WorkflowSpec::parse(index, item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(AppError::invalid_spec(format!(
                    "'workflows' must be a list, found {}",
                    value_repr(other)
                )));
            }
            None => return Err(AppError::invalid_spec("'workflows' is required")),
        };

        Ok(Self { parameters, workflows })
    }
}

/// Extract the optional `parameters` section of a spec document.
pub fn repo_parameters(root: &Mapping) -> Result<Mapping, AppError> {
    match root.get(PARAMETERS_KEY) {
        None | Some(Value::Null) => Ok(Mapping::new()),
        Some(Value::Mapping(parameters)) => Ok(parameters.clone()),
        Some(other) => Err(AppError::invalid_spec(format!(
            "'parameters' must be a mapping, found {}",
            value_repr(other)
        ))),
    }
}

/// One entry of the `workflows` list.
#[derive(Debug, Clone)]
pub struct WorkflowSpec {
    pub name: Option<String>,
    pub file: Option<String>,
    pub body: WorkflowBody,
    /// The entry as written in the spec document.
    pub fields: Mapping,
}

/// How a workflow document is produced.
#[derive(Debug, Clone)]
pub enum WorkflowBody {
    /// The whole document comes from one named workflow template.
    Delegated { template: String },
    /// The document is assembled from a trigger section and job blocks.
    Composed { triggers: TriggerSpec, jobs: Vec<JobSpec> },
}

impl WorkflowSpec {
    pub fn parse(index: usize, value: &Value) -> Result<Self, AppError> {
        let fields = value.as_mapping().ok_or_else(|| {
            AppError::invalid_spec(format!(
                "workflow #{} must be a mapping, found {}",
                index + 1,
                value_repr(value)
            ))
        })?;

        let label = workflow_label(index, fields);
        let name = optional_string(fields, "name", &label)?;
        let file = optional_string(fields, "file", &label)?;

        let body = match optional_string(fields, TEMPLATE_KEY, &label)? {
            Some(template) => WorkflowBody::Delegated { template },
            None => {
                let triggers = fields.get("triggers").ok_or_else(|| {
                    AppError::invalid_spec(format!("workflow {label} is missing 'triggers'"))
                })?;
                let jobs = match fields.get("jobs") {
                    Some(Value::Sequence(jobs)) => jobs
                        .iter()
                        .enumerate()
                        .map(|(job_index, job)| JobSpec::parse(&label, job_index, job))
                        .collect::<Result<Vec<_>, _>>()?,
                    Some(other) => {
                        return Err(AppError::invalid_spec(format!(
                            "workflow {label}: 'jobs' must be a list, found {}",
                            value_repr(other)
                        )));
                    }
                    None => {
                        return Err(AppError::invalid_spec(format!(
                            "workflow {label} is missing 'jobs'"
                        )));
                    }
                };
                WorkflowBody::Composed { triggers: TriggerSpec::parse(triggers, &label)?, jobs }
            }
        };

        Ok(Self { name, file, body, fields: fields.clone() })
    }

    /// Name of the whole-document template, when the workflow delegates to one.
    pub fn template(&self) -> Option<&str> {
        match &self.body {
            WorkflowBody::Delegated { template } => Some(template),
            WorkflowBody::Composed { .. } => None,
        }
    }

    /// Short identifier used in diagnostics.
    pub fn label(&self) -> String {
        self.name
            .as_deref()
            .or(self.file.as_deref())
            .or(self.template())
            .map(|label| format!("'{label}'"))
            .unwrap_or_else(|| value_repr(&Value::Mapping(self.fields.clone())))
    }
}

/// The `triggers` section of a workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerSpec {
    /// Serialized to YAML as written.
    Literal(Value),
    /// Rendered from `trigger/<name>`, with the full mapping as context.
    Template { name: String, fields: Mapping },
}

impl TriggerSpec {
    pub fn parse(value: &Value, workflow: &str) -> Result<Self, AppError> {
        let Some(fields) = value.as_mapping() else {
            return Ok(TriggerSpec::Literal(value.clone()));
        };

        match fields.get(TEMPLATE_KEY) {
            None => Ok(TriggerSpec::Literal(value.clone())),
            Some(Value::String(name)) => {
                Ok(TriggerSpec::Template { name: name.clone(), fields: fields.clone() })
            }
            Some(other) => Err(AppError::invalid_spec(format!(
                "workflow {workflow}: trigger template must be a string, found {}",
                value_repr(other)
            ))),
        }
    }
}

/// One job of a composed workflow.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub kind: JobKind,
    /// The job mapping with `template_args` normalized to a list.
    pub fields: Mapping,
}

#[derive(Debug, Clone)]
pub enum JobKind {
    /// Steps rendered from `job/<name>`.
    Template { name: String },
    /// Steps assembled from an ordered block list.
    Custom { blocks: Vec<BlockSpec> },
}

impl JobSpec {
    pub fn parse(workflow: &str, index: usize, value: &Value) -> Result<Self, AppError> {
        let Some(job) = value.as_mapping() else {
            return Err(AppError::UnknownJobType(value_repr(value)));
        };

        let mut fields = job.clone();
        if !fields.contains_key(TEMPLATE_ARGS_KEY) {
            fields.insert(Value::from(TEMPLATE_ARGS_KEY), Value::Sequence(Vec::new()));
        }

        let location = format!("workflow {workflow}, job #{}", index + 1);

        if fields.get(TYPE_KEY).and_then(Value::as_str) == Some(CUSTOM_JOB_TYPE) {
            let blocks = match fields.get("blocks") {
                Some(Value::Sequence(blocks)) => blocks
                    .iter()
                    .enumerate()
                    .map(|(block_index, block)| BlockSpec::parse(&location, block_index, block))
                    .collect::<Result<Vec<_>, _>>()?,
                Some(other) => {
                    return Err(AppError::invalid_spec(format!(
                        "{location}: 'blocks' must be a list, found {}",
                        value_repr(other)
                    )));
                }
                None => {
                    return Err(AppError::invalid_spec(format!(
                        "{location}: custom job is missing 'blocks'"
                    )));
                }
            };
            return Ok(Self { kind: JobKind::Custom { blocks }, fields });
        }

        match fields.get(TEMPLATE_KEY) {
            Some(Value::String(name)) => {
                let name = name.clone();
                Ok(Self { kind: JobKind::Template { name }, fields })
            }
            _ => Err(AppError::UnknownJobType(value_repr(value))),
        }
    }
}

/// One step-level fragment of a custom job.
#[derive(Debug, Clone)]
pub struct BlockSpec {
    pub kind: BlockKind,
    pub fields: Mapping,
}

#[derive(Debug, Clone)]
pub enum BlockKind {
    /// Rendered from the fragment template `<name>`.
    Template { name: String },
    /// Inline `steps` serialized to YAML, then rendered as a template.
    Raw { steps: Value },
}

impl BlockSpec {
    /// An explicit `template` reference wins over `type: raw`.
    pub fn parse(job: &str, index: usize, value: &Value) -> Result<Self, AppError> {
        let Some(fields) = value.as_mapping() else {
            return Err(AppError::UnsupportedBlockType(value_repr(value)));
        };

        let kind = match fields.get(TEMPLATE_KEY) {
            Some(Value::String(name)) => BlockKind::Template { name: name.clone() },
            Some(other) => {
                return Err(AppError::invalid_spec(format!(
                    "{job}, block #{}: template must be a string, found {}",
                    index + 1,
                    value_repr(other)
                )));
            }
            None if fields.get(TYPE_KEY).and_then(Value::as_str) == Some(RAW_BLOCK_TYPE) => {
                let steps = fields.get("steps").cloned().ok_or_else(|| {
                    AppError::invalid_spec(format!(
                        "{job}, block #{}: raw block is missing 'steps'",
                        index + 1
                    ))
                })?;
                BlockKind::Raw { steps }
            }
            None => return Err(AppError::UnsupportedBlockType(value_repr(value))),
        };

        Ok(Self { kind, fields: fields.clone() })
    }
}

fn workflow_label(index: usize, fields: &Mapping) -> String {
    ["name", "file", TEMPLATE_KEY]
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(|label| format!("'{label}'"))
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn optional_string(fields: &Mapping, key: &str, workflow: &str) -> Result<Option<String>, AppError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(AppError::invalid_spec(format!(
            "workflow {workflow}: '{key}' must be a string, found {}",
            value_repr(other)
        ))),
    }
}
