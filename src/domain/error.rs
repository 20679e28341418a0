use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for boxctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without a known path.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a specific path.
    #[error("I/O error at {path}: {source}")]
    IoAt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory is missing `.env` or `docker-compose.yml`.
    #[error("Not a Devilbox project root: {0} (expected .env and docker-compose.yml)")]
    InvalidProjectRoot(PathBuf),

    /// The `.env` configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Backup source directory does not exist.
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    /// No PHP error log exists at any known location.
    #[error("PHP error log file not found at: {0}")]
    LogNotFound(PathBuf),

    /// Slot name is not one of php, httpd, mysql.
    #[error("Invalid slot '{0}': must be one of php, httpd, mysql")]
    InvalidSlot(String),

    /// Time-of-day text is not `HH:MM:SS`.
    #[error("Invalid time '{0}': use HH:MM:SS")]
    InvalidTime(String),

    /// Date text is not a real `YYYY-MM-DD` date.
    #[error("Invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),

    /// Input rejected before any side effect.
    #[error("{0}")]
    Validation(String),

    /// Settings file problem.
    #[error("{0}")]
    Configuration(String),

    /// Settings file is not valid TOML for the expected schema.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    /// Attach a path to an `io::Error`.
    pub fn io_at(path: impl AsRef<Path>, source: io::Error) -> Self {
        AppError::IoAt { path: path.as_ref().to_path_buf(), source }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// `io::ErrorKind`-like classification so callers can branch on "not found" vs "invalid".
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::IoAt { source: err, .. } => err.kind(),
            AppError::ConfigNotFound(_) | AppError::SourceNotFound(_) | AppError::LogNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::InvalidProjectRoot(_)
            | AppError::InvalidSlot(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidDate(_)
            | AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
        }
    }

    /// True for the distinct "missing file or directory" conditions.
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }
}
