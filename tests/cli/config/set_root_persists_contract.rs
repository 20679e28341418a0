use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn set_root_is_used_by_later_commands() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.scratch())
        .args(["config", "set-root"])
        .arg(ctx.devilbox())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project root set to"));

    let stored = fs::read_to_string(ctx.config_path()).unwrap();
    assert!(stored.contains("[project]"));

    ctx.cli_in(ctx.scratch())
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHP (php): 8.1"));
}

#[test]
fn set_root_rejects_invalid_directory_and_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["config", "set-root"])
        .arg(ctx.scratch())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a Devilbox project root"));

    assert!(!ctx.config_path().exists());
}

#[test]
fn show_prints_defaults_and_honors_config_env() {
    let ctx = TestContext::new();
    let custom = ctx.scratch().join("custom.toml");
    fs::write(&custom, "[logs]\nstart_time = \"08:00:00\"\n").unwrap();

    ctx.cli()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extensions = \"php,js,css,html,htaccess\""))
        .stdout(predicate::str::contains("days = 7"));

    ctx.cli()
        .args(["config", "show"])
        .env("BOXCTL_CONFIG", &custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("start_time = \"08:00:00\""));
}

#[test]
fn malformed_settings_file_is_reported() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.config_path().parent().unwrap()).unwrap();
    fs::write(ctx.config_path(), "[backup]\nunknown = true\n").unwrap();

    ctx.cli().arg("versions").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}
