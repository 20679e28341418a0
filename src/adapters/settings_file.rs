//! Load and save `config.toml`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Settings};

use super::atomic_file::write_atomic;

/// Read settings from `path`. A missing file yields defaults.
pub fn load_settings(path: &Path) -> Result<Settings, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Settings::parse_toml(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(err) => Err(AppError::io_at(path, err)),
    }
}

/// Validate and write settings to `path` in one rename.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), AppError> {
    settings.validate()?;
    write_atomic(path, settings.to_toml()?.as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}
