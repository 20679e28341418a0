use crate::harness::TestContext;
use crate::harness::devilbox_fixture::SAMPLE_LOG;
use predicates::prelude::*;

const FPM_LOG: &str = "log/php-fpm-8.1/php-fpm.error";

#[test]
fn show_without_dates_prints_every_line() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[01-Jan-2024 10:00:00 UTC] PHP Warning"))
        .stdout(predicate::str::contains("Stack trace:"))
        .stdout(predicate::str::contains("\r").not());
}

#[test]
fn show_with_range_keeps_only_timestamped_lines_inside_it() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "show", "--from", "2024-01-02", "--to", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[02-Jan-2024 10:00:00 UTC] PHP Fatal error"))
        .stdout(predicate::str::contains("01-Jan-2024").not())
        .stdout(predicate::str::contains("Stack trace:").not());
}

#[test]
fn show_range_bounds_are_inclusive() {
    let ctx = TestContext::new();
    ctx.write_file(FPM_LOG, SAMPLE_LOG);

    ctx.cli()
        .args(["logs", "show", "--from", "2024-01-01", "--from-time", "10:00:00"])
        .args(["--to", "2024-01-01", "--to-time", "10:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[01-Jan-2024 10:00:00 UTC]"));
}

#[test]
fn show_falls_back_to_php_server_error_log() {
    let ctx = TestContext::new();
    ctx.write_file("log/php-8.1/error.log", "[05-Mar-2024 08:00:00 UTC] fallback entry\n");

    ctx.cli()
        .args(["logs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fallback entry"));
}

#[test]
fn show_reads_explicit_file() {
    let ctx = TestContext::new();
    let file = ctx.scratch().join("custom.log");
    std::fs::write(&file, "[05-Mar-2024 08:00:00 UTC] custom entry\n").unwrap();

    ctx.cli()
        .args(["logs", "show", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom entry"));
}
