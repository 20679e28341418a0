//! Settings file location and project root resolution.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ProjectRoot, Settings};

/// Environment variable overriding the settings file path.
pub const CONFIG_ENV: &str = "BOXCTL_CONFIG";

/// Settings path: `--config`, else `$BOXCTL_CONFIG`, else `~/.boxctl/config.toml`.
pub fn settings_path(flag: Option<&Path>) -> Result<PathBuf, AppError> {
    settings_path_from(
        flag,
        env::var_os(CONFIG_ENV),
        env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")),
    )
}

fn settings_path_from(
    flag: Option<&Path>,
    from_env: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = from_env
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(".boxctl").join("config.toml")),
        _ => Err(AppError::config_error(
            "Cannot locate the home directory; pass --config or set BOXCTL_CONFIG",
        )),
    }
}

/// Project root: `--root`, else the configured root, else the current directory.
///
/// The chosen directory must pass root validation.
pub fn resolve_root(flag: Option<&Path>, settings: &Settings) -> Result<ProjectRoot, AppError> {
    let candidate = match (flag, settings.project.root.as_deref()) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) => path.to_path_buf(),
        (None, None) => env::current_dir()?,
    };
    debug!("project root candidate: {}", candidate.display());
    ProjectRoot::open(candidate)
}
