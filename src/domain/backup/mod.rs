//! Selective backup model: what to copy and what happened.

mod report;
mod request;
mod selector;

pub use report::{BackupReport, CopyResult};
pub use request::{BackupRequest, DEFAULT_DAYS, DEFAULT_EXTENSIONS, normalize_days};
pub use selector::{ExtensionSet, FileSelector, is_recent, matches};
