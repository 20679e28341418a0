use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome for one selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub success: bool,
    /// Path relative to the source root.
    pub relative_path: PathBuf,
    /// Human-readable status line.
    pub status: String,
    /// Failure detail, `None` on success.
    pub error: Option<String>,
}

impl CopyResult {
    pub fn copied(relative_path: &Path) -> Self {
        Self {
            success: true,
            relative_path: relative_path.to_path_buf(),
            status: format!("Copied: {}", relative_path.display()),
            error: None,
        }
    }

    pub fn dir_failed(relative_path: &Path, dir: &Path, error: impl ToString) -> Self {
        Self {
            success: false,
            relative_path: relative_path.to_path_buf(),
            status: format!("Failed to create directory: {}", dir.display()),
            error: Some(error.to_string()),
        }
    }

    pub fn copy_failed(relative_path: &Path, source: &Path, error: impl ToString) -> Self {
        Self {
            success: false,
            relative_path: relative_path.to_path_buf(),
            status: format!("Failed to copy file: {}", source.display()),
            error: Some(error.to_string()),
        }
    }
}

/// Result set of a backup run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackupReport {
    pub results: Vec<CopyResult>,
    /// Files copied successfully.
    pub copied: usize,
}

impl BackupReport {
    pub fn push(&mut self, result: CopyResult) {
        if result.success {
            self.copied += 1;
        }
        self.results.push(result);
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyResult> {
        self.results.iter().filter(|result| !result.success)
    }

    pub fn summary(&self) -> String {
        format!("Backup complete. Copied {} files.", self.copied)
    }
}
