mod common;

use common::TestContext;
use predicates::prelude::*;

const BUILD_SPEC: &str = r#"
parameters:
  node: 22
workflows:
  - name: Build App!
    triggers:
      push:
        branches: [main]
    jobs:
      - id: lint
        template: lint
      - id: build
        type: custom
        blocks:
          - template: steps/checkout
          - type: raw
            steps:
              - run: npm run build -- --node {* args.node *}
"#;

fn build_context() -> TestContext {
    let ctx = TestContext::new();
    ctx.write_template("job/lint.j2", "- run: npm run lint\n");
    ctx.write_template("steps/checkout.j2", "- uses: actions/checkout@v4\n");
    ctx.write_spec(BUILD_SPEC);
    ctx
}

#[test]
fn render_writes_named_workflow() {
    let ctx = build_context();

    ctx.cli()
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""files":["build_app.yml"]"#))
        .stderr(predicate::str::contains("Writing ./.github/workflows/build_app.yml"));

    let output = ctx.read_output("build_app.yml");
    assert!(
        output.starts_with("name: Build App!\non:\n  push:\n    branches:\n    - main\njobs:\n  lint:\n"),
        "{output}"
    );
    assert!(output.contains("    runs-on: ubuntu-latest\n    steps:\n    - run: npm run lint\n"), "{output}");
    assert!(
        output.contains("    - uses: actions/checkout@v4\n    - run: npm run build -- --node 22\n"),
        "{output}"
    );
}

#[test]
fn jobs_keep_spec_order() {
    let ctx = build_context();
    ctx.cli().assert().success();

    let output = ctx.read_output("build_app.yml");
    let lint = output.find("  lint:").unwrap();
    let build = output.find("  build:").unwrap();
    assert!(lint < build);
}

#[test]
fn explicit_file_and_workflow_template() {
    let ctx = TestContext::new();
    ctx.write_template("workflow/release/publish.j2", "name: Publish\nchannel: {* workflow.channel *}\n");
    ctx.write_spec("workflows:\n  - file: custom.yaml\n    template: release/publish\n    channel: release\n  - template: release/publish\n    channel: tag\n");

    ctx.cli().assert().success();

    assert_eq!(ctx.read_output("custom.yaml"), "name: Publish\nchannel: release\n");
    assert_eq!(ctx.read_output("release_publish.yml"), "name: Publish\nchannel: tag\n");
}

#[test]
fn missing_job_template_fails_without_writing() {
    let ctx = TestContext::new();
    ctx.write_template("workflow/ok.j2", "ok\n");
    ctx.write_spec(
        "workflows:\n  - template: ok\n  - name: Deploy\n    triggers: push\n    jobs:\n      - id: deploy\n        template: deploy\n",
    );

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template").and(predicate::str::contains("job/deploy.j2")));

    assert!(!ctx.output_exists("ok.yml"));
    assert!(!ctx.output_exists("deploy.yml"));
}

#[test]
fn duplicate_keys_fail_by_default() {
    let ctx = TestContext::new();
    ctx.write_template("workflow/ok.j2", "ok\n");
    ctx.write_spec("workflows:\n  - name: first\n    name: second\n    template: ok\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key 'name'"));
}

#[test]
fn duplicate_keys_allowed_by_flag_or_env() {
    let ctx = TestContext::new();
    ctx.write_template("workflow/ok.j2", "ok\n");
    ctx.write_spec("workflows:\n  - name: first\n    name: second\n    template: ok\n");

    ctx.cli().arg("--allow-duplicate-keys").assert().success();
    assert!(ctx.output_exists("second.yml"));

    std::fs::remove_file(ctx.output_dir().join("second.yml")).unwrap();
    ctx.cli().env("ALLOW_DUPLICATE_KEYS", "true").assert().success();
    assert!(ctx.output_exists("second.yml"));
}

#[test]
fn locations_can_come_from_environment() {
    let ctx = build_context();
    let out = ctx.work_dir().join("generated");

    ctx.cli()
        .env("MODE", "render")
        .env("OUTPUT_LOCATION", &out)
        .env("TEMPLATE_LOCATION", ctx.template_dir())
        .assert()
        .success();

    assert!(out.join("build_app.yml").exists());
    assert!(!ctx.output_exists("build_app.yml"));
}

#[test]
fn missing_spec_file_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("workflows.yml"));
}

#[test]
fn missing_parameter_names_the_key() {
    let ctx = TestContext::new();
    ctx.write_template("job/uses_arg.j2", "- run: echo {* args.not_defined *}\n");
    ctx.write_spec("workflows:\n  - name: x\n    triggers: push\n    jobs:\n      - id: a\n        template: uses_arg\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Parameter 'not_defined' is not defined in repo parameters or defaults",
        ));
    assert!(!ctx.output_exists("x.yml"));
}

#[test]
fn unwritable_output_leaves_earlier_files_unwritten() {
    let ctx = TestContext::new();
    ctx.write_template("workflow/ok.j2", "ok\n");
    ctx.write_spec("workflows:\n  - file: first.yml\n    template: ok\n  - file: blocker/second.yml\n    template: ok\n");
    std::fs::create_dir_all(ctx.output_dir()).unwrap();
    std::fs::write(ctx.output_dir().join("blocker"), "plain file").unwrap();

    ctx.cli().assert().failure().code(1);

    assert!(!ctx.output_exists("first.yml"));
    assert!(!ctx.output_exists(".first.yml.tmp"));
}
