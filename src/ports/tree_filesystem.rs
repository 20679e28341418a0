//! Directory traversal and copy primitives used by the backup walker.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// What a directory entry is, without following symlinked directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    /// `None` when the platform cannot report a modification time.
    pub modified: Option<DateTime<Utc>>,
}

/// Port for the filesystem operations a backup run needs.
///
/// Implementations list entries sorted by name so runs are deterministic.
pub trait TreeFilesystem {
    /// List the direct children of `dir`.
    fn read_dir(&self, dir: &Path) -> Result<Vec<TreeEntry>, AppError>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError>;

    /// Copy `from` to `to`, overwriting any existing file.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;
}
