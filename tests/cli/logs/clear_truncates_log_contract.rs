use crate::harness::TestContext;
use crate::harness::devilbox_fixture::SAMPLE_LOG;
use predicates::prelude::*;
use std::fs;

#[test]
fn clear_with_yes_truncates_active_log() {
    let ctx = TestContext::new();
    let log = ctx.write_file("log/php-fpm-8.1/php-fpm.error", SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    assert!(log.exists());
    assert_eq!(fs::read_to_string(&log).unwrap(), "");
}

#[test]
fn clear_reports_missing_log() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["logs", "clear", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PHP error log file not found"));
}
