use std::path::Path;

use crate::adapters::{load_settings, save_settings};
use crate::domain::project_root::absolute_path;
use crate::domain::{AppError, ProjectRoot, Settings};

/// Validate `root` and store it as the default project root.
pub fn set_root(settings_path: &Path, root: &Path) -> Result<ProjectRoot, AppError> {
    let root = ProjectRoot::open(absolute_path(root))?;
    let mut settings = load_settings(settings_path)?;
    settings.project.root = Some(root.path().to_path_buf());
    save_settings(settings_path, &settings)?;
    Ok(root)
}

/// Render effective settings as TOML.
pub fn show(settings: &Settings) -> Result<String, AppError> {
    settings.to_toml()
}
