//! Shared testing utilities for templater CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BASE_TEMPLATE: &str = "name: {* workflow.name *}\non:\n{* workflow.triggers | indent(2, true) *}\njobs:\n{* workflow.jobs *}\n";

pub const JOB_BASE_TEMPLATE: &str = "  {* job.id *}:\n    runs-on: {* args.runner *}\n    steps:\n{* rendered_steps | indent(4, true) *}\n";

/// Testing harness providing an isolated working directory laid out the
/// way the tool expects by default.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with the default base templates.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };
        ctx.write_template("base.j2", BASE_TEMPLATE);
        ctx.write_template("job/base.j2", JOB_BASE_TEMPLATE);
        ctx.write_defaults("runner: ubuntu-latest\n");
        ctx
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn template_dir(&self) -> PathBuf {
        self.work_dir().join("tmp/template")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir().join(".github/workflows")
    }

    pub fn write_template(&self, name: &str, content: &str) {
        self.write_file(&self.template_dir().join(name), content);
    }

    pub fn write_defaults(&self, content: &str) {
        self.write_file(&self.work_dir().join("tmp/defaults.yml"), content);
    }

    pub fn write_spec(&self, content: &str) {
        self.write_file(&self.work_dir().join(".github/workflows.yml"), content);
    }

    pub fn read_output(&self, file: &str) -> String {
        fs::read_to_string(self.output_dir().join(file))
            .unwrap_or_else(|e| panic!("Failed to read output {file}: {e}"))
    }

    pub fn output_exists(&self, file: &str) -> bool {
        self.output_dir().join(file).exists()
    }

    /// Build a command for the compiled `templater` binary, run from the
    /// work directory with a clean CI environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("templater").expect("Failed to locate templater binary");
        cmd.current_dir(self.work_dir());
        for var in [
            "MODE",
            "TEMPLATE_LOCATION",
            "DEFAULTS_FILE",
            "WORKFLOWS_FILE",
            "OUTPUT_LOCATION",
            "ALLOW_DUPLICATE_KEYS",
            "GITHUB_ENV",
            "GITHUB_OUTPUT",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }
}
