mod project_store;
mod tree_filesystem;

pub use project_store::ProjectStore;
pub use tree_filesystem::{EntryKind, TreeEntry, TreeFilesystem};
