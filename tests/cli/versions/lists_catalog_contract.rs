use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn versions_lists_active_and_known_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHP (php): 8.1"))
        .stdout(predicate::str::contains("* 8.1"))
        .stdout(predicate::str::contains("  5.6"))
        .stdout(predicate::str::contains("Web server (httpd): nginx-stable"))
        .stdout(predicate::str::contains("Database (mysql): mariadb-10.6"));
}

#[test]
fn versions_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["versions", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = value.as_array().unwrap();
    assert_eq!(slots.len(), 3);

    let php = slots.iter().find(|s| s["slot"] == "php").unwrap();
    assert_eq!(php["key"], "PHP_SERVER");
    assert_eq!(php["active"], "8.1");
    assert_eq!(php["known"], serde_json::json!(["5.6", "7.4", "8.1", "8.2"]));
}

#[test]
fn versions_reports_missing_env_after_root_check() {
    let ctx = TestContext::new();
    std::fs::remove_file(ctx.devilbox().join(".env")).unwrap();

    ctx.cli().arg("versions").assert().failure().stderr(predicate::str::contains("Error:"));
}
