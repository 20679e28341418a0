//! In-memory `ProjectStore` for command tests.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Project, ProjectRoot, RewriteSummary, Slot, rewrite_slot};
use crate::ports::ProjectStore;

/// Project store backed by shared maps. Clones see each other's writes.
#[derive(Debug, Clone)]
pub struct MemoryProjectStore {
    root: ProjectRoot,
    env: Arc<Mutex<Option<String>>>,
    projects: BTreeSet<String>,
    logs: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            root: ProjectRoot::unchecked("/devilbox"),
            env: Arc::new(Mutex::new(None)),
            projects: BTreeSet::new(),
            logs: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_env(self, content: &str) -> Self {
        self.set_env(content);
        self
    }

    pub fn with_project(mut self, name: &str) -> Self {
        self.projects.insert(name.to_string());
        self
    }

    /// Seed a log at `relative` below the root.
    pub fn with_log(self, relative: &str, content: &str) -> Self {
        let path = self.root.path().join(relative);
        self.logs.lock().unwrap().insert(path, content.to_string());
        self
    }

    pub fn set_env(&self, content: &str) {
        *self.env.lock().unwrap() = Some(content.to_string());
    }

    pub fn env(&self) -> Option<String> {
        self.env.lock().unwrap().clone()
    }
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn root(&self) -> &ProjectRoot {
        &self.root
    }

    fn read_env(&self) -> Result<String, AppError> {
        self.env().ok_or_else(|| AppError::ConfigNotFound(self.root.env_file()))
    }

    fn write_slot(&self, slot: Slot, value: &str) -> Result<RewriteSummary, AppError> {
        let current = self.read_env()?;
        let mut rewritten = Vec::new();
        let summary = rewrite_slot(current.as_bytes(), &mut rewritten, slot, value)?;
        if !summary.changed_anything() {
            return Err(AppError::Validation(format!("no active {} line", slot.key())));
        }
        self.set_env(&String::from_utf8_lossy(&rewritten));
        Ok(summary)
    }

    fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let www = self.root.www_dir();
        Ok(self.projects.iter().map(|name| Project::new(name, &www)).collect())
    }

    fn locate_php_log(&self, php_server: &str) -> Result<PathBuf, AppError> {
        let logs = self.logs.lock().unwrap();
        let candidates = self.root.php_log_candidates(php_server);
        candidates
            .iter()
            .find(|candidate| logs.contains_key(*candidate))
            .cloned()
            .ok_or_else(|| AppError::LogNotFound(candidates[0].clone()))
    }

    fn read_log(&self, path: &Path) -> Result<String, AppError> {
        self.logs
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::LogNotFound(path.to_path_buf()))
    }

    fn clear_log(&self, path: &Path) -> Result<(), AppError> {
        match self.logs.lock().unwrap().get_mut(path) {
            Some(content) => {
                content.clear();
                Ok(())
            }
            None => Err(AppError::LogNotFound(path.to_path_buf())),
        }
    }
}
