//! `TreeFilesystem` backed by `std::fs`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::{EntryKind, TreeEntry, TreeFilesystem};

/// Real filesystem access for backup runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl TreeFilesystem for LocalFilesystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<TreeEntry>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|err| AppError::io_at(dir, err))? {
            let entry = entry.map_err(|err| AppError::io_at(dir, err))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|err| AppError::io_at(&path, err))?;

            // Symlinked directories are not descended into; symlinked files are copied.
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(metadata) if metadata.is_file() => EntryKind::File,
                    _ => EntryKind::Other,
                }
            } else {
                EntryKind::Other
            };

            let modified = match kind {
                EntryKind::File => fs::metadata(&path)
                    .and_then(|metadata| metadata.modified())
                    .ok()
                    .map(DateTime::<Utc>::from),
                _ => None,
            };

            entries.push(TreeEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                kind,
                modified,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir).map_err(|err| AppError::io_at(dir, err))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::copy(from, to).map(|_| ()).map_err(|err| AppError::io_at(from, err))
    }
}
