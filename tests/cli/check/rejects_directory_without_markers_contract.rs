use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn check_rejects_directory_missing_compose_file() {
    let ctx = TestContext::new();
    fs::remove_file(ctx.devilbox().join("docker-compose.yml")).unwrap();

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a Devilbox project root"));
}

#[test]
fn every_project_command_requires_a_valid_root() {
    let ctx = TestContext::new();

    for args in [vec!["versions"], vec!["projects"], vec!["use", "php", "8.2"], vec!["logs", "show"]] {
        ctx.cli_in(ctx.scratch())
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not a Devilbox project root"));
    }
}
