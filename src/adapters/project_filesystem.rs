//! `ProjectStore` over a Devilbox checkout on disk.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Project, ProjectRoot, RewriteSummary, Slot, rewrite_slot};
use crate::ports::ProjectStore;

use super::atomic_file::{commit, stage_next_to};

/// Filesystem-backed project store.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: ProjectRoot,
}

impl FilesystemProjectStore {
    pub fn new(root: ProjectRoot) -> Self {
        Self { root }
    }

    /// Validate `path` and open a store on it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self::new(ProjectRoot::open(path)?))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn root(&self) -> &ProjectRoot {
        &self.root
    }

    fn read_env(&self) -> Result<String, AppError> {
        let path = self.root.env_file();
        let bytes = fs::read(&path).map_err(|err| env_error(&path, err))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_slot(&self, slot: Slot, value: &str) -> Result<RewriteSummary, AppError> {
        let path = self.root.env_file();
        let input = File::open(&path).map_err(|err| env_error(&path, err))?;
        let mut staged = stage_next_to(&path)?;

        let summary = {
            let staged_path = staged.path().to_path_buf();
            let mut writer = BufWriter::new(staged.as_file_mut());
            let summary = rewrite_slot(BufReader::new(input), &mut writer, slot, value)
                .map_err(|err| AppError::io_at(&staged_path, err))?;
            writer.flush().map_err(|err| AppError::io_at(&staged_path, err))?;
            summary
        };

        if !summary.changed_anything() {
            return Err(AppError::Validation(format!(
                "{} has no active {} line to replace",
                path.display(),
                slot.key()
            )));
        }

        commit(staged, &path)?;
        debug!(
            slot = slot.name(),
            value,
            replaced = summary.replaced,
            commented = summary.commented,
            "rewrote {}",
            path.display()
        );
        Ok(summary)
    }

    fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let www = self.root.www_dir();
        let entries = match fs::read_dir(&www) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no project directory at {}", www.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(AppError::io_at(&www, err)),
        };

        let mut projects = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AppError::io_at(&www, err))?;
            if entry.path().is_dir() {
                projects.push(Project::new(&entry.file_name().to_string_lossy(), &www));
            }
        }
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    fn locate_php_log(&self, php_server: &str) -> Result<PathBuf, AppError> {
        let [primary, fallback] = self.root.php_log_candidates(php_server);
        for candidate in [&primary, &fallback] {
            if candidate.is_file() {
                debug!("using PHP log {}", candidate.display());
                return Ok(candidate.clone());
            }
        }
        Err(AppError::LogNotFound(primary))
    }

    fn read_log(&self, path: &Path) -> Result<String, AppError> {
        let bytes = fs::read(path).map_err(|err| log_error(path, err))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn clear_log(&self, path: &Path) -> Result<(), AppError> {
        OpenOptions::new().write(true).truncate(true).open(path).map_err(|err| log_error(path, err))?;
        debug!("truncated {}", path.display());
        Ok(())
    }
}

fn env_error(path: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::ConfigNotFound(path.to_path_buf())
    } else {
        AppError::io_at(path, err)
    }
}

fn log_error(path: &Path, err: io::Error) -> AppError {
    if err.kind() == io::ErrorKind::NotFound {
        AppError::LogNotFound(path.to_path_buf())
    } else {
        AppError::io_at(path, err)
    }
}
