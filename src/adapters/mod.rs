mod atomic_file;
pub mod local_filesystem;
pub mod project_filesystem;
pub mod settings_file;

pub use local_filesystem::LocalFilesystem;
pub use project_filesystem::FilesystemProjectStore;
pub use settings_file::{load_settings, save_settings};
