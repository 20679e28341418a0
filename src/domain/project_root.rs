//! Devilbox checkout layout.

use std::path::{Component, Path, PathBuf};

use super::AppError;

/// Configuration file holding the slot assignments.
pub const ENV_FILE: &str = ".env";
/// Compose file that must sit next to `.env`.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// True iff `path` directly contains both `.env` and `docker-compose.yml`.
///
/// A missing or unreadable path is simply not a valid root.
pub fn is_valid_root(path: &Path) -> bool {
    path.join(ENV_FILE).is_file() && path.join(COMPOSE_FILE).is_file()
}

/// A directory that passed [`is_valid_root`] when it was opened.
///
/// Callers re-open whenever the configured root changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if !is_valid_root(&path) {
            return Err(AppError::InvalidProjectRoot(path));
        }
        Ok(Self { path })
    }

    /// Skip the marker check. In-memory stores have nothing on disk to check.
    #[cfg(test)]
    pub(crate) fn unchecked(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn env_file(&self) -> PathBuf {
        self.path.join(ENV_FILE)
    }

    pub fn compose_file(&self) -> PathBuf {
        self.path.join(COMPOSE_FILE)
    }

    /// `data/www`, one subdirectory per project.
    pub fn www_dir(&self) -> PathBuf {
        self.path.join("data").join("www")
    }

    /// Candidate PHP error log locations for a `PHP_SERVER` value, most specific first.
    pub fn php_log_candidates(&self, php_server: &str) -> [PathBuf; 2] {
        let log_dir = self.path.join("log");
        [
            log_dir
                .join(format!("php-fpm-{}", php_log_version(php_server)))
                .join("php-fpm.error"),
            log_dir.join(format!("php-{}", php_server)).join("error.log"),
        ]
    }
}

/// Version part of a `PHP_SERVER` value: `php-7.4` -> `7.4`, `8.1` -> `8.1`.
pub fn php_log_version(php_server: &str) -> String {
    match php_server.find("php-") {
        Some(index) => php_server[index + 4..].to_string(),
        None => php_server.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect(),
    }
}

/// Absolute, normalized form of `path` relative to the current directory.
pub fn absolute_path(path: &Path) -> PathBuf {
    normalize_path(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Resolve `.` and `..` components logically, without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
