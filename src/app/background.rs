//! Run a backup off the calling thread.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use chrono::Utc;

use crate::adapters::LocalFilesystem;
use crate::app::commands::backup;
use crate::domain::{AppError, BackupReport, BackupRequest, CopyResult};
use crate::ports::TreeFilesystem;

/// Handle to a backup running on a worker thread.
pub struct BackupTask {
    progress: Receiver<CopyResult>,
    handle: JoinHandle<Result<BackupReport, AppError>>,
}

impl BackupTask {
    /// Results produced since the last call, without blocking.
    pub fn poll(&self) -> Vec<CopyResult> {
        self.progress.try_iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the run ends and return its report.
    pub fn wait(self) -> Result<BackupReport, AppError> {
        self.handle
            .join()
            .map_err(|_| AppError::Io(io::Error::other("backup worker panicked")))?
    }
}

/// Start a backup of the local filesystem.
pub fn spawn_backup(request: BackupRequest) -> BackupTask {
    spawn_backup_with(LocalFilesystem, request)
}

/// Start a backup against any filesystem implementation.
pub fn spawn_backup_with<F>(fs: F, request: BackupRequest) -> BackupTask
where
    F: TreeFilesystem + Send + 'static,
{
    let (sender, progress) = mpsc::channel();
    let handle = thread::spawn(move || {
        backup::execute(&fs, &request, Utc::now(), |result| {
            // The receiver may already be gone; the report still carries every result.
            let _ = sender.send(result.clone());
        })
    });
    BackupTask { progress, handle }
}
