use std::path::PathBuf;

use serde::Serialize;

/// A site under `data/www/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    /// Document root, `data/www/<name>/htdocs`.
    pub htdocs: PathBuf,
    /// Local vhost URL.
    pub url: String,
}

impl Project {
    pub fn new(name: &str, www_dir: &std::path::Path) -> Self {
        Self {
            name: name.to_string(),
            htdocs: www_dir.join(name).join("htdocs"),
            url: format!("http://{}.local", name),
        }
    }
}
