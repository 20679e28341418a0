pub mod backup;
pub mod catalog;
pub mod error;
pub mod logs;
pub mod project;
pub mod project_root;
pub mod settings;
pub mod slot;

pub use backup::{BackupReport, BackupRequest, CopyResult, ExtensionSet, FileSelector};
pub use catalog::{CatalogEntry, RewriteSummary, VersionCatalog, rewrite_slot};
pub use error::AppError;
pub use logs::{DateTimeRange, LogLine, filter_log, parse_timestamp};
pub use project::Project;
pub use project_root::{ProjectRoot, is_valid_root};
pub use settings::Settings;
pub use slot::Slot;
