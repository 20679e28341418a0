//! Version catalog read from the Devilbox `.env` file.
//!
//! The file keeps one active assignment per slot plus a block of commented-out
//! alternatives introduced by a marker comment:
//!
//! ```text
//! ### Choose PHP Server Image
//! #PHP_SERVER=7.4
//! PHP_SERVER=8.1
//! #PHP_SERVER=8.2
//! ```

mod rewrite;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Slot;

pub use rewrite::{RewriteSummary, rewrite_slot};

/// Active value and offered alternatives for one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Value of the last uncommented `KEY=` line. `None` when the file has no such line.
    pub active: Option<String>,
    /// Every non-empty value seen in the slot's catalog block, first-seen order, no duplicates.
    pub known: Vec<String>,
}

impl CatalogEntry {
    fn offer(&mut self, value: &str) {
        if value.is_empty() || self.known.iter().any(|known| known == value) {
            return;
        }
        self.known.push(value.to_string());
    }
}

/// Per-slot catalog. Always holds an entry for every slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCatalog {
    entries: BTreeMap<Slot, CatalogEntry>,
}

impl Default for VersionCatalog {
    fn default() -> Self {
        Self { entries: Slot::ALL.into_iter().map(|slot| (slot, CatalogEntry::default())).collect() }
    }
}

impl VersionCatalog {
    /// Build a catalog from `.env` text.
    pub fn parse(text: &str) -> Self {
        let mut catalog = Self::default();

        // Active values: uncommented lines only.
        for line in text.split('\n') {
            if line.is_empty() || line.starts_with('#') || line.starts_with('\r') {
                continue;
            }
            for slot in Slot::ALL {
                if let Some(rest) = line.strip_prefix(slot.prefix()) {
                    catalog.entry_mut(slot).active = Some(line_value(rest).to_string());
                }
            }
        }

        // Known values: anything in a slot's section that carries its token.
        let mut section: Option<Slot> = None;
        for line in text.split('\n') {
            if let Some(slot) = Slot::ALL.into_iter().find(|slot| line.contains(slot.marker())) {
                section = Some(slot);
                continue;
            }
            let Some(slot) = section else {
                continue;
            };

            let body = match line.strip_prefix('#') {
                Some(rest) => rest.trim_start_matches([' ', '\t']),
                None => line,
            };
            if let Some(index) = body.find(slot.prefix()) {
                let value = line_value(&body[index + slot.prefix().len()..]);
                catalog.entry_mut(slot).offer(value);
            }
        }

        catalog
    }

    pub fn entry(&self, slot: Slot) -> &CatalogEntry {
        // Every slot is inserted by `Default`.
        static EMPTY: CatalogEntry = CatalogEntry { active: None, known: Vec::new() };
        self.entries.get(&slot).unwrap_or(&EMPTY)
    }

    pub fn active(&self, slot: Slot) -> Option<&str> {
        self.entry(slot).active.as_deref()
    }

    pub fn known(&self, slot: Slot) -> &[String] {
        &self.entry(slot).known
    }

    /// True when no slot has an active value or any alternatives.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|entry| entry.active.is_none() && entry.known.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &CatalogEntry)> {
        self.entries.iter().map(|(slot, entry)| (*slot, entry))
    }

    /// Record a new active value after a confirmed rewrite.
    pub(crate) fn set_active(&mut self, slot: Slot, value: &str) {
        self.entry_mut(slot).active = Some(value.to_string());
    }

    fn entry_mut(&mut self, slot: Slot) -> &mut CatalogEntry {
        self.entries.entry(slot).or_default()
    }
}

/// Text up to the first CR or LF.
fn line_value(rest: &str) -> &str {
    rest.split(['\r', '\n']).next().unwrap_or_default()
}
