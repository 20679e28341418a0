use crate::harness::TestContext;
use crate::harness::devilbox_fixture::SAMPLE_LOG;
use predicates::prelude::*;

const FPM_LOG: &str = "log/php-fpm-8.1/php-fpm.error";

#[test]
fn empty_log_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, "");

    ctx.cli()
        .args(["logs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log file is empty."));
}

#[test]
fn range_without_matches_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "show", "--from", "2020-01-01", "--to", "2020-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No log entries found in the specified date range."));
}

#[test]
fn missing_log_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["logs", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PHP error log file not found"));
}

#[test]
fn malformed_date_and_time_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "show", "--from", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date '2024-02-30'"));

    ctx.cli()
        .args(["logs", "show", "--from", "2024-01-01", "--from-time", "7:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time '7:00'"));
}
