//! `TreeFilesystem` that delegates to disk but fails on chosen names.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use crate::adapters::LocalFilesystem;
use crate::domain::AppError;
use crate::ports::{TreeEntry, TreeFilesystem};

#[derive(Debug, Clone, Default)]
pub struct FlakyFilesystem {
    inner: LocalFilesystem,
    copy_failures: HashSet<String>,
    create_dir_failures: HashSet<String>,
    read_dir_failures: HashSet<String>,
}

impl FlakyFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail copies whose source file is named `name`.
    pub fn fail_copy(mut self, name: &str) -> Self {
        self.copy_failures.insert(name.to_string());
        self
    }

    /// Fail creating any directory named `name`.
    pub fn fail_create_dir(mut self, name: &str) -> Self {
        self.create_dir_failures.insert(name.to_string());
        self
    }

    /// Fail listing any directory named `name`.
    pub fn fail_read_dir(mut self, name: &str) -> Self {
        self.read_dir_failures.insert(name.to_string());
        self
    }
}

fn named(path: &Path, names: &HashSet<String>) -> bool {
    path.file_name().is_some_and(|name| names.contains(name.to_string_lossy().as_ref()))
}

fn denied(path: &Path) -> AppError {
    AppError::io_at(path, io::Error::new(io::ErrorKind::PermissionDenied, "denied by test"))
}

impl TreeFilesystem for FlakyFilesystem {
    fn read_dir(&self, dir: &Path) -> Result<Vec<TreeEntry>, AppError> {
        if named(dir, &self.read_dir_failures) {
            return Err(denied(dir));
        }
        self.inner.read_dir(dir)
    }

    fn create_dir_all(&self, dir: &Path) -> Result<(), AppError> {
        if named(dir, &self.create_dir_failures) {
            return Err(denied(dir));
        }
        self.inner.create_dir_all(dir)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if named(from, &self.copy_failures) {
            return Err(denied(from));
        }
        self.inner.copy_file(from, to)
    }
}
