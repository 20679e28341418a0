use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ProjectRoot};

/// Validate that `path` is a Devilbox checkout.
pub fn execute(path: &Path) -> Result<ProjectRoot, AppError> {
    let root = ProjectRoot::open(path)?;
    debug!("project root ok: {}", root.path().display());
    Ok(root)
}
