//! CLI Adapter.
//!
//! Every flag can also be set through the environment, which is how the
//! tool is driven from a CI job.

use std::path::{Path, PathBuf};

use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::commands::output::write_summary;
use crate::domain::{AppError, DuplicateKeys};
use crate::{GetRefOptions, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "templater")]
#[command(version)]
#[command(about = "Render CI workflow files from a workflow spec and a template library", long_about = None)]
struct Cli {
    /// RENDER writes workflow files, GET_REF publishes the template ref to fetch
    #[arg(long, env = "MODE", value_enum, ignore_case = true, default_value = "RENDER")]
    mode: Mode,

    /// Root directory of the template checkout
    #[arg(long, alias = "template_location", env = "TEMPLATE_LOCATION", default_value = "./tmp/template/")]
    template_location: PathBuf,

    /// Default parameter values shipped with the templates
    #[arg(long, alias = "defaults_file", env = "DEFAULTS_FILE", default_value = "./tmp/defaults.yml")]
    defaults_file: PathBuf,

    /// Workflow spec document of the repository
    #[arg(
        long,
        alias = "workflow_spec_file",
        env = "WORKFLOWS_FILE",
        default_value = "./.github/workflows.yml"
    )]
    workflow_spec_file: PathBuf,

    /// Directory rendered workflows are written into
    #[arg(long, alias = "output_location", env = "OUTPUT_LOCATION", default_value = "./.github/workflows/")]
    output_location: PathBuf,

    /// Let later duplicate mapping keys replace earlier ones instead of failing
    #[arg(
        long,
        alias = "allow_duplicate_keys",
        env = "ALLOW_DUPLICATE_KEYS",
        value_parser = FalseyValueParser::new()
    )]
    allow_duplicate_keys: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    #[value(name = "RENDER")]
    Render,
    #[value(name = "GET_REF")]
    GetRef,
}

impl Cli {
    fn duplicate_keys(&self) -> DuplicateKeys {
        if self.allow_duplicate_keys { DuplicateKeys::LastWins } else { DuplicateKeys::Reject }
    }
}

pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let duplicate_keys = cli.duplicate_keys();
    match cli.mode {
        Mode::Render => {
            let output = crate::render(RenderOptions {
                template_location: cli.template_location,
                defaults_file: cli.defaults_file,
                workflow_spec_file: cli.workflow_spec_file,
                output_location: cli.output_location,
                duplicate_keys,
            })?;
            for file in &output.files {
                eprintln!("Writing {}", Path::new(&output.output_dir).join(file).display());
            }
            write_summary(&output)
        }
        Mode::GetRef => {
            let output = crate::get_ref(GetRefOptions {
                workflow_spec_file: cli.workflow_spec_file,
                duplicate_keys,
            })?;
            write_summary(&output)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
