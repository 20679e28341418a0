use assert_fs::prelude::*;
use boxctl::{
    AppError, BackupRequest, LogOutcome, LogQuery, Settings, Slot, backup, check, clear_log,
    open_session, projects, set_version, show_log, spawn_backup, versions,
};
use predicates::prelude::*;
use crate::harness::TestContext;
use crate::harness::devilbox_fixture::SAMPLE_LOG;

#[test]
fn public_api_version_lifecycle_contract() {
    let ctx = TestContext::new();
    let root = ctx.devilbox();

    check(root).expect("check failed");

    let catalog = versions(root).expect("versions failed");
    assert_eq!(catalog.active(Slot::Php), Some("8.1"));
    assert_eq!(catalog.known(Slot::Httpd), ["nginx-stable", "apache-2.4"]);

    let outcome = set_version(root, Slot::Php, "8.2").expect("set_version failed");
    assert_eq!(outcome.previous.as_deref(), Some("8.1"));

    let mut session = open_session(root).expect("open_session failed");
    assert_eq!(session.catalog().active(Slot::Php), Some("8.2"));
    session.set_active(Slot::Mysql, "mysql-8.0").expect("set_active failed");
    assert_eq!(session.catalog().active(Slot::Mysql), Some("mysql-8.0"));
    assert_eq!(session.reload().unwrap().active(Slot::Mysql), Some("mysql-8.0"));

    assert!(projects(root).unwrap().is_empty());
}

#[test]
fn public_api_logs_contract() {
    let ctx = TestContext::new();
    let root = ctx.devilbox();
    let settings = Settings::default();

    assert!(matches!(
        show_log(root, &settings, &LogQuery::default()),
        Err(AppError::LogNotFound(_))
    ));

    ctx.write_file("log/php-fpm-8.1/php-fpm.error", SAMPLE_LOG);
    let view = show_log(root, &settings, &LogQuery::default()).unwrap();
    assert!(matches!(view.outcome, LogOutcome::Entries(_)));

    let path = clear_log(root, None).unwrap();
    assert_eq!(path, view.path);
    let view = show_log(root, &settings, &LogQuery::default()).unwrap();
    assert_eq!(view.outcome, LogOutcome::Empty);
}

#[test]
fn public_api_background_backup_contract() {
    let ctx = TestContext::new();
    let source = ctx.scratch().join("site");
    ctx.write_aged(&source.join("index.php"), "<?php", 0);
    ctx.write_aged(&source.join("theme/site.css"), "body{}", 0);

    let task = spawn_backup(BackupRequest::new(&source, ctx.scratch().join("out")));
    let report = task.wait().unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(report.summary(), "Backup complete. Copied 2 files.");
}

#[test]
fn public_api_backup_progress_contract() {
    let source = assert_fs::TempDir::new().unwrap();
    let target = assert_fs::TempDir::new().unwrap();
    source.child("index.php").write_str("<?php").unwrap();
    source.child("vendor/lib.js").write_str("lib()").unwrap();
    source.child("notes.txt").write_str("skip").unwrap();

    let mut statuses = Vec::new();
    let report = backup(&BackupRequest::new(source.path(), target.path()), |result| {
        statuses.push(result.status.clone())
    })
    .unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(statuses.len(), 2);
    target.child("index.php").assert(predicate::path::exists());
    target.child("vendor/lib.js").assert("lib()");
    target.child("notes.txt").assert(predicate::path::missing());
}
