use std::fmt;

use chrono::{DateTime, Duration, Utc};

const HTACCESS: &str = ".htaccess";

/// Case-insensitive set of file suffixes, each stored as `.ext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Parse a `,`/`;` separated list such as `php, .JS;css`.
    pub fn parse(spec: &str) -> Self {
        let mut suffixes: Vec<String> = Vec::new();
        for token in spec.split([',', ';']) {
            let token = token.trim();
            if token.is_empty() || token == "." {
                continue;
            }
            let suffix = if token.starts_with('.') {
                token.to_lowercase()
            } else {
                format!(".{}", token.to_lowercase())
            };
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        Self { suffixes }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Whether `filename` (a bare name, not a path) carries one of the suffixes.
    ///
    /// A file named exactly `.htaccess` matches only when `htaccess` is listed.
    pub fn matches(&self, filename: &str) -> bool {
        if filename == HTACCESS {
            return self.suffixes.iter().any(|s| s == HTACCESS);
        }
        let Some(index) = filename.rfind('.') else {
            return false;
        };
        let extension = &filename[index..];
        self.suffixes.iter().any(|s| s.eq_ignore_ascii_case(extension))
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffixes.join(","))
    }
}

/// True iff `modified >= now - days`.
pub fn is_recent(modified: DateTime<Utc>, days: u32, now: DateTime<Utc>) -> bool {
    modified >= cutoff(days, now)
}

fn cutoff(days: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(days))).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Extension and recency filter applied to each file of a backup walk.
#[derive(Debug, Clone)]
pub struct FileSelector {
    extensions: ExtensionSet,
    cutoff: DateTime<Utc>,
}

impl FileSelector {
    pub fn new(extensions: ExtensionSet, days: u32, now: DateTime<Utc>) -> Self {
        Self { extensions, cutoff: cutoff(days, now) }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn matches(&self, filename: &str, modified: DateTime<Utc>) -> bool {
        self.extensions.matches(filename) && modified >= self.cutoff
    }
}

/// One-shot form of [`FileSelector::matches`].
pub fn matches(
    filename: &str,
    extension_spec: &str,
    modified: DateTime<Utc>,
    days: u32,
    now: DateTime<Utc>,
) -> bool {
    ExtensionSet::parse(extension_spec).matches(filename) && is_recent(modified, days, now)
}
