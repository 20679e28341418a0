//! Same-directory temp file plus rename.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::AppError;

/// Create a uniquely named temp file next to `path`.
///
/// Dropping the returned file without [`commit`] deletes it.
pub(crate) fn stage_next_to(path: &Path) -> Result<NamedTempFile, AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tempfile::Builder::new()
        .prefix(".boxctl-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|err| AppError::io_at(dir, err))
}

/// Flush `staged` and rename it over `path`, keeping the original permissions.
pub(crate) fn commit(staged: NamedTempFile, path: &Path) -> Result<(), AppError> {
    staged.as_file().sync_all().map_err(|err| AppError::io_at(staged.path(), err))?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(staged.path(), metadata.permissions())
            .map_err(|err| AppError::io_at(staged.path(), err))?;
    }
    staged.persist(path).map_err(|err| AppError::io_at(path, err.error))?;
    Ok(())
}

/// Replace `path` with `content` in one rename, creating parent directories.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| AppError::io_at(parent, err))?;
    }
    let mut staged = stage_next_to(path)?;
    staged.write_all(content).map_err(|err| AppError::io_at(staged.path(), err))?;
    commit(staged, path)
}
