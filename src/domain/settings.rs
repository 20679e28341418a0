//! User settings loaded from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::backup::{DEFAULT_DAYS, DEFAULT_EXTENSIONS, ExtensionSet};
use crate::domain::logs::parse_time_of_day;

/// Persisted boxctl settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub project: ProjectSettings,
    #[serde(default)]
    pub backup: BackupSettings,
    #[serde(default)]
    pub logs: LogSettings,
}

impl Settings {
    /// Parse and validate TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|err| AppError::config_error(format!("Failed to serialize settings: {}", err)))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.backup.validate()?;
        self.logs.validate()?;
        Ok(())
    }
}

/// Stored project locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    /// Devilbox checkout used when `--root` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Script that starts the containers. Stored only; boxctl never runs it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_script: Option<PathBuf>,
}

/// Defaults for `boxctl backup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupSettings {
    #[serde(default = "default_extensions")]
    pub extensions: String,
    /// Non-positive values fall back to seven days when a backup runs.
    #[serde(default = "default_days")]
    pub days: i64,
    #[serde(default = "default_true")]
    pub include_subdirs: bool,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self { extensions: default_extensions(), days: default_days(), include_subdirs: true }
    }
}

impl BackupSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if ExtensionSet::parse(&self.extensions).is_empty() {
            return Err(AppError::config_error("backup.extensions must list at least one extension"));
        }
        Ok(())
    }
}

/// Default time-of-day bounds for `boxctl logs show`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default = "default_end_time")]
    pub end_time: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { start_time: default_start_time(), end_time: default_end_time() }
    }
}

impl LogSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [("logs.start_time", &self.start_time), ("logs.end_time", &self.end_time)] {
            parse_time_of_day(value).map_err(|_| {
                AppError::config_error(format!("{} must be HH:MM:SS, got '{}'", key, value))
            })?;
        }
        Ok(())
    }
}

fn default_extensions() -> String {
    DEFAULT_EXTENSIONS.to_string()
}

fn default_days() -> i64 {
    i64::from(DEFAULT_DAYS)
}

fn default_true() -> bool {
    true
}

fn default_start_time() -> String {
    "00:00:00".to_string()
}

fn default_end_time() -> String {
    "23:59:59".to_string()
}
