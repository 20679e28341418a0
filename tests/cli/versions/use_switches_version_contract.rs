use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn use_switches_php_and_preserves_other_slots() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["use", "php", "7.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched PHP from 8.1 to 7.4"));

    let env = ctx.read_env();
    assert!(env.contains("\nPHP_SERVER=7.4\n"));
    assert!(!env.contains("\nPHP_SERVER=8.1\n"));
    assert!(env.contains("\nHTTPD_SERVER=nginx-stable\n"));
    assert!(env.contains("\nMYSQL_SERVER=mariadb-10.6\n"));
    assert_eq!(env.lines().count(), crate::harness::devilbox_fixture::SAMPLE_ENV.lines().count());
}

#[test]
fn use_accepts_key_names_and_short_alias() {
    let ctx = TestContext::new();

    ctx.cli().args(["u", "MYSQL_SERVER", "mysql-8.0"]).assert().success();

    ctx.cli()
        .args(["versions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database (mysql): mysql-8.0"));
}

#[test]
fn repeating_the_same_switch_is_stable() {
    let ctx = TestContext::new();

    ctx.cli().args(["use", "httpd", "apache-2.4"]).assert().success();
    let first = ctx.read_env();
    ctx.cli()
        .args(["use", "httpd", "apache-2.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Web server set to apache-2.4"));

    assert_eq!(ctx.read_env(), first);
}
