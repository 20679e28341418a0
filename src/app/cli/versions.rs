//! `versions` and `use` commands.

use dialoguer::Select;
use serde::Serialize;

use crate::app::api;
use crate::app::commands::versions::parse_slot;
use crate::domain::{AppError, Slot, VersionCatalog};

use super::Globals;

#[derive(Serialize)]
struct SlotView<'a> {
    slot: Slot,
    key: &'static str,
    active: Option<&'a str>,
    known: &'a [String],
}

pub(super) fn run_versions(globals: &Globals, json: bool) -> Result<(), AppError> {
    let settings = globals.settings()?;
    let root = globals.project_root(&settings)?;
    let catalog = api::versions(root.path())?;

    if json {
        let views: Vec<SlotView<'_>> = catalog
            .iter()
            .map(|(slot, entry)| SlotView {
                slot,
                key: slot.key(),
                active: entry.active.as_deref(),
                known: &entry.known,
            })
            .collect();
        let text = serde_json::to_string_pretty(&views).map_err(|err| AppError::Io(err.into()))?;
        println!("{}", text);
        return Ok(());
    }

    print_catalog(&catalog);
    Ok(())
}

fn print_catalog(catalog: &VersionCatalog) {
    for (slot, entry) in catalog.iter() {
        println!("{} ({}): {}", slot.label(), slot, entry.active.as_deref().unwrap_or("(not set)"));
        for value in &entry.known {
            let marker = if entry.active.as_deref() == Some(value.as_str()) { "*" } else { " " };
            println!("  {} {}", marker, value);
        }
    }
}

pub(super) fn run_use(globals: &Globals, slot: &str, value: Option<String>) -> Result<(), AppError> {
    let slot = parse_slot(slot)?;
    let settings = globals.settings()?;
    let root = globals.project_root(&settings)?;

    let value = match value {
        Some(value) => value,
        None => {
            let catalog = api::versions(root.path())?;
            match prompt_value(&catalog, slot)? {
                Some(value) => value,
                None => return Ok(()),
            }
        }
    };

    let outcome = api::set_version(root.path(), slot, &value)?;
    match outcome.previous.as_deref() {
        Some(previous) if previous != outcome.value => {
            println!("✅ Switched {} from {} to {}", slot.label(), previous, outcome.value)
        }
        _ => println!("✅ {} set to {}", slot.label(), outcome.value),
    }
    Ok(())
}

fn prompt_value(catalog: &VersionCatalog, slot: Slot) -> Result<Option<String>, AppError> {
    let known = catalog.known(slot);
    if known.is_empty() {
        return Err(AppError::Validation(format!(
            "No known {} values in .env; pass one explicitly",
            slot.key()
        )));
    }

    let default = catalog
        .active(slot)
        .and_then(|active| known.iter().position(|value| value == active))
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt(format!("Select {} version", slot.label()))
        .items(known)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select version: {}", err)))?;

    Ok(selection.map(|index| known[index].clone()))
}
