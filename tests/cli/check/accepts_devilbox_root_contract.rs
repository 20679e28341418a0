use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_accepts_current_directory_with_markers() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid Devilbox project root"));
}

#[test]
fn check_uses_explicit_root_flag() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.scratch())
        .arg("check")
        .arg("--root")
        .arg(ctx.devilbox())
        .assert()
        .success();
}
