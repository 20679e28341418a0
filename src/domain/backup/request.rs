use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::project_root::absolute_path;

use super::ExtensionSet;

/// Extensions selected when the caller gives none.
pub const DEFAULT_EXTENSIONS: &str = "php,js,css,html,htaccess";
/// Recency window used when the caller gives zero or a negative count.
pub const DEFAULT_DAYS: u32 = 7;

/// Parameters for one backup run.
#[derive(Debug, Clone)]
pub struct BackupRequest {
    source: PathBuf,
    target: PathBuf,
    extensions: ExtensionSet,
    include_subdirs: bool,
    days: u32,
}

impl BackupRequest {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            extensions: ExtensionSet::parse(DEFAULT_EXTENSIONS),
            include_subdirs: true,
            days: DEFAULT_DAYS,
        }
    }

    pub fn with_extensions(mut self, spec: &str) -> Self {
        self.extensions = ExtensionSet::parse(spec);
        self
    }

    pub fn with_subdirs(mut self, include_subdirs: bool) -> Self {
        self.include_subdirs = include_subdirs;
        self
    }

    /// Set the recency window; `days <= 0` falls back to [`DEFAULT_DAYS`].
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = normalize_days(days);
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn include_subdirs(&self) -> bool {
        self.include_subdirs
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Check the request before any file is touched.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.source.exists() {
            return Err(AppError::SourceNotFound(self.source.clone()));
        }
        if !self.source.is_dir() {
            return Err(AppError::Validation(format!(
                "Backup source is not a directory: {}",
                self.source.display()
            )));
        }
        if self.extensions.is_empty() {
            return Err(AppError::Validation("No file extensions selected for backup".to_string()));
        }
        if self.target.as_os_str().is_empty() {
            return Err(AppError::Validation("Backup target path is empty".to_string()));
        }
        if absolute_path(&self.source) == absolute_path(&self.target) {
            return Err(AppError::Validation(format!(
                "Backup target is the source directory: {}",
                self.target.display()
            )));
        }
        Ok(())
    }
}

pub fn normalize_days(days: i64) -> u32 {
    if days <= 0 { DEFAULT_DAYS } else { u32::try_from(days).unwrap_or(u32::MAX) }
}
