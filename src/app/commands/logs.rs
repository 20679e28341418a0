use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::app::AppContext;
use crate::domain::settings::LogSettings;
use crate::domain::{AppError, DateTimeRange, Slot, VersionCatalog, filter_log};
use crate::ports::ProjectStore;

/// Options for viewing the PHP error log.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub from_date: Option<NaiveDate>,
    pub from_time: Option<String>,
    pub to_date: Option<NaiveDate>,
    pub to_time: Option<String>,
    /// Explicit log file instead of the one derived from `PHP_SERVER`.
    pub file: Option<PathBuf>,
}

impl LogQuery {
    /// Filtering is active only when a start or end date is given.
    pub fn is_filtered(&self) -> bool {
        self.from_date.is_some() || self.to_date.is_some()
    }

    /// Resolve the requested range. Missing dates mean `today`, missing times
    /// come from the configured defaults.
    pub fn range(
        &self,
        defaults: &LogSettings,
        today: NaiveDate,
    ) -> Result<Option<DateTimeRange>, AppError> {
        if !self.is_filtered() {
            return Ok(None);
        }
        let range = DateTimeRange::parse(
            self.from_date.unwrap_or(today),
            self.from_time.as_deref().unwrap_or(&defaults.start_time),
            self.to_date.unwrap_or(today),
            self.to_time.as_deref().unwrap_or(&defaults.end_time),
        )?;
        Ok(Some(range))
    }
}

/// What a log view produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    /// Rendered lines, each terminated by `\n`.
    Entries(String),
    /// The file has no content at all.
    Empty,
    /// A range was given and no line fell inside it.
    NoMatches,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    pub path: PathBuf,
    pub range: Option<DateTimeRange>,
    pub outcome: LogOutcome,
}

/// Read and optionally filter the PHP error log.
pub fn show<S: ProjectStore>(
    ctx: &AppContext<S>,
    query: &LogQuery,
    today: NaiveDate,
) -> Result<LogView, AppError> {
    let range = query.range(&ctx.settings().logs, today)?;
    let path = locate(ctx.store(), query.file.as_deref())?;
    let text = ctx.store().read_log(&path)?;

    let outcome = if text.is_empty() {
        LogOutcome::Empty
    } else {
        let rendered = filter_log(&text, range.as_ref());
        if rendered.is_empty() { LogOutcome::NoMatches } else { LogOutcome::Entries(rendered) }
    };
    debug!(path = %path.display(), filtered = range.is_some(), "rendered log");
    Ok(LogView { path, range, outcome })
}

/// Truncate the PHP error log and return its path.
pub fn clear(store: &impl ProjectStore, file: Option<&Path>) -> Result<PathBuf, AppError> {
    let path = locate(store, file)?;
    store.clear_log(&path)?;
    Ok(path)
}

/// Explicit file, else the log belonging to the active `PHP_SERVER`.
pub fn locate(store: &impl ProjectStore, file: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }
    let catalog = VersionCatalog::parse(&store.read_env()?);
    let php_server = catalog.active(Slot::Php).filter(|value| !value.is_empty()).ok_or_else(|| {
        AppError::Validation(format!(
            "{} has no active {} assignment",
            store.root().env_file().display(),
            Slot::Php.key()
        ))
    })?;
    store.locate_php_log(php_server)
}
