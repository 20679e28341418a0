//! boxctl: manage a local Devilbox checkout.
//!
//! Switch PHP, web server and database images in `.env`, back up recently
//! modified project files, and read the PHP error log by date range.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BackupTask, LogOutcome, LogQuery, LogView, Session, SetVersionOutcome, backup, check,
    clear_log, load_settings, locate_log, open_session, projects, render_settings, set_root,
    set_version, show_log, spawn_backup, versions,
};
pub use domain::{
    AppError, BackupReport, BackupRequest, CopyResult, DateTimeRange, Project, ProjectRoot,
    Settings, Slot, VersionCatalog, filter_log, is_valid_root, parse_timestamp,
};
