//! Access to a Devilbox checkout.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Project, ProjectRoot, RewriteSummary, Slot};

/// Port for everything boxctl reads or writes inside a project root.
pub trait ProjectStore {
    /// The validated root this store operates on.
    fn root(&self) -> &ProjectRoot;

    /// Read `.env`. A missing file is `ConfigNotFound`.
    fn read_env(&self) -> Result<String, AppError>;

    /// Switch `slot` to `value` in `.env`, all or nothing.
    ///
    /// The original file is untouched unless the rewritten content was fully
    /// produced and at least one active assignment was replaced.
    fn write_slot(&self, slot: Slot, value: &str) -> Result<RewriteSummary, AppError>;

    /// Projects under `data/www`, sorted by name.
    fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// First existing PHP error log for a `PHP_SERVER` value, else `LogNotFound`.
    fn locate_php_log(&self, php_server: &str) -> Result<PathBuf, AppError>;

    /// Read a log file as text. Invalid UTF-8 is replaced, not rejected.
    fn read_log(&self, path: &Path) -> Result<String, AppError>;

    /// Truncate a log file to zero length.
    fn clear_log(&self, path: &Path) -> Result<(), AppError>;
}
