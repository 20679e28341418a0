//! API Facade for the application.
//!
//! High-level functions that open a project root, build the context and run a
//! command. The CLI goes through here, and so can embedders.

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};

use crate::adapters::{self, FilesystemProjectStore, LocalFilesystem};
use crate::app::AppContext;
use crate::app::commands::{backup as backup_cmd, check as check_cmd, logs, projects as projects_cmd};
use crate::app::commands::{settings as settings_cmd, versions};

pub use crate::app::background::{BackupTask, spawn_backup};
pub use crate::app::commands::logs::{LogOutcome, LogQuery, LogView};
pub use crate::app::commands::versions::SetVersionOutcome;
pub use crate::app::session::Session;
pub use crate::domain::{
    AppError, BackupReport, BackupRequest, CopyResult, Project, ProjectRoot, Settings, Slot,
    VersionCatalog,
};

fn create_context(root: &Path, settings: Settings) -> Result<AppContext<FilesystemProjectStore>, AppError> {
    Ok(AppContext::new(FilesystemProjectStore::open(root)?, settings))
}

/// Validate that `path` is a Devilbox project root.
pub fn check(path: &Path) -> Result<ProjectRoot, AppError> {
    check_cmd::execute(path)
}

/// Open a session that keeps the catalog in memory between calls.
pub fn open_session(root: &Path) -> Result<Session<FilesystemProjectStore>, AppError> {
    Session::open(FilesystemProjectStore::open(root)?)
}

// =============================================================================
// Versions
// =============================================================================

/// Read the active and available versions from `.env`.
pub fn versions(root: &Path) -> Result<VersionCatalog, AppError> {
    versions::load(&FilesystemProjectStore::open(root)?)
}

/// Switch `slot` to `value` in `.env`.
pub fn set_version(root: &Path, slot: Slot, value: &str) -> Result<SetVersionOutcome, AppError> {
    versions::set(&FilesystemProjectStore::open(root)?, slot, value)
}

// =============================================================================
// Projects
// =============================================================================

pub fn projects(root: &Path) -> Result<Vec<Project>, AppError> {
    projects_cmd::execute(&FilesystemProjectStore::open(root)?)
}

// =============================================================================
// Backup
// =============================================================================

/// Run a backup on the calling thread, reporting each selected file as it is done.
pub fn backup(
    request: &BackupRequest,
    on_progress: impl FnMut(&CopyResult),
) -> Result<BackupReport, AppError> {
    backup_cmd::execute(&LocalFilesystem, request, Utc::now(), on_progress)
}

// =============================================================================
// PHP error log
// =============================================================================

/// Read the PHP error log, filtered when the query names a date.
///
/// Missing dates default to today in local time.
pub fn show_log(root: &Path, settings: &Settings, query: &LogQuery) -> Result<LogView, AppError> {
    let ctx = create_context(root, settings.clone())?;
    logs::show(&ctx, query, Local::now().date_naive())
}

/// Path of the log `show_log` and `clear_log` operate on.
pub fn locate_log(root: &Path, file: Option<&Path>) -> Result<PathBuf, AppError> {
    logs::locate(&FilesystemProjectStore::open(root)?, file)
}

/// Truncate the PHP error log.
pub fn clear_log(root: &Path, file: Option<&Path>) -> Result<PathBuf, AppError> {
    logs::clear(&FilesystemProjectStore::open(root)?, file)
}

// =============================================================================
// Settings
// =============================================================================

/// Load settings, falling back to defaults when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, AppError> {
    adapters::load_settings(path)
}

/// Validate `root` and store it as the default project root.
pub fn set_root(settings_path: &Path, root: &Path) -> Result<ProjectRoot, AppError> {
    settings_cmd::set_root(settings_path, root)
}

/// Effective settings as TOML text.
pub fn render_settings(settings: &Settings) -> Result<String, AppError> {
    settings_cmd::show(settings)
}
