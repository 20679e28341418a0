//! Recursive selective backup.
//!
//! Walks the source tree, copies every file the [`FileSelector`] accepts into
//! the same relative location under the target, and reports one
//! [`CopyResult`] per selected file. Per-file failures never abort the run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::project_root::absolute_path;
use crate::domain::{AppError, BackupReport, BackupRequest, CopyResult, FileSelector};
use crate::ports::{EntryKind, TreeEntry, TreeFilesystem};

/// Run a backup, calling `on_progress` once per selected file as it is processed.
///
/// An invalid request or an unreadable source root fails the whole run.
/// Unreadable subdirectories are skipped with a warning.
pub fn execute<F, P>(
    fs: &F,
    request: &BackupRequest,
    now: DateTime<Utc>,
    mut on_progress: P,
) -> Result<BackupReport, AppError>
where
    F: TreeFilesystem + ?Sized,
    P: FnMut(&CopyResult),
{
    request.validate()?;

    let walker = Walker {
        fs,
        request,
        selector: FileSelector::new(request.extensions().clone(), request.days(), now),
        target: absolute_path(request.target()),
    };
    debug!(
        source = %request.source().display(),
        target = %request.target().display(),
        extensions = %request.extensions(),
        cutoff = %walker.selector.cutoff(),
        "starting backup"
    );

    let entries = fs.read_dir(request.source())?;
    let mut report = BackupReport::default();
    walker.visit(entries, &mut report, &mut on_progress);

    info!(copied = report.copied, failed = report.failures().count(), "backup finished");
    Ok(report)
}

struct Walker<'a, F: TreeFilesystem + ?Sized> {
    fs: &'a F,
    request: &'a BackupRequest,
    selector: FileSelector,
    target: PathBuf,
}

impl<F: TreeFilesystem + ?Sized> Walker<'_, F> {
    fn visit<P: FnMut(&CopyResult)>(
        &self,
        entries: Vec<TreeEntry>,
        report: &mut BackupReport,
        on_progress: &mut P,
    ) {
        for entry in entries {
            match entry.kind {
                EntryKind::File => {
                    let Some(modified) = entry.modified else {
                        debug!("no modification time for {}", entry.path.display());
                        continue;
                    };
                    if !self.selector.matches(&entry.name, modified) {
                        continue;
                    }
                    let result = self.copy(&entry.path);
                    on_progress(&result);
                    report.push(result);
                }
                EntryKind::Directory if self.request.include_subdirs() => {
                    if absolute_path(&entry.path) == self.target {
                        debug!("not descending into backup target {}", entry.path.display());
                        continue;
                    }
                    match self.fs.read_dir(&entry.path) {
                        Ok(children) => self.visit(children, report, on_progress),
                        Err(err) => warn!("skipping unreadable directory: {}", err),
                    }
                }
                _ => {}
            }
        }
    }

    fn copy(&self, source_file: &Path) -> CopyResult {
        let relative = source_file.strip_prefix(self.request.source()).unwrap_or(source_file);
        let destination = self.request.target().join(relative);

        if let Some(parent) = destination.parent()
            && let Err(err) = self.fs.create_dir_all(parent)
        {
            warn!("{}", err);
            return CopyResult::dir_failed(relative, parent, err);
        }

        match self.fs.copy_file(source_file, &destination) {
            Ok(()) => {
                debug!("copied {}", relative.display());
                CopyResult::copied(relative)
            }
            Err(err) => {
                warn!("{}", err);
                CopyResult::copy_failed(relative, source_file, err)
            }
        }
    }
}
