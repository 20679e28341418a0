use tracing::{debug, info};

use crate::domain::{AppError, RewriteSummary, Slot, VersionCatalog};
use crate::ports::ProjectStore;

/// Result of switching one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetVersionOutcome {
    pub slot: Slot,
    pub previous: Option<String>,
    pub value: String,
    pub summary: RewriteSummary,
}

/// Read `.env` and build a fresh catalog.
pub fn load(store: &impl ProjectStore) -> Result<VersionCatalog, AppError> {
    let catalog = VersionCatalog::parse(&store.read_env()?);
    for (slot, entry) in catalog.iter() {
        debug!(
            slot = slot.name(),
            active = entry.active.as_deref().unwrap_or("-"),
            known = entry.known.len(),
            "catalog entry"
        );
    }
    Ok(catalog)
}

/// Values become the tail of a single `KEY=value` line.
pub fn validate_value(value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation("Version value must not be empty".to_string()));
    }
    if value.contains(['\r', '\n']) {
        return Err(AppError::Validation(format!(
            "Version value must be a single line: {:?}",
            value
        )));
    }
    Ok(())
}

/// Switch `slot` to `value` in `.env`.
pub fn set(
    store: &impl ProjectStore,
    slot: Slot,
    value: &str,
) -> Result<SetVersionOutcome, AppError> {
    validate_value(value)?;
    let previous = VersionCatalog::parse(&store.read_env()?).active(slot).map(str::to_string);
    let summary = store.write_slot(slot, value)?;
    info!(slot = slot.name(), value, "switched version");
    Ok(SetVersionOutcome { slot, previous, value: value.to_string(), summary })
}

/// Parse a user-supplied slot name.
pub fn parse_slot(name: &str) -> Result<Slot, AppError> {
    Slot::from_name(name).ok_or_else(|| AppError::InvalidSlot(name.to_string()))
}
