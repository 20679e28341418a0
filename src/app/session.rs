use crate::app::commands::versions;
use crate::domain::{AppError, ProjectRoot, RewriteSummary, Slot, VersionCatalog};
use crate::ports::ProjectStore;

/// A project root plus the catalog last read from it.
///
/// The catalog is a snapshot; call [`Session::reload`] after external edits.
pub struct Session<S: ProjectStore> {
    store: S,
    catalog: VersionCatalog,
}

impl<S: ProjectStore> Session<S> {
    /// Open a session and load the catalog once.
    pub fn open(store: S) -> Result<Self, AppError> {
        let catalog = versions::load(&store)?;
        Ok(Self { store, catalog })
    }

    pub fn root(&self) -> &ProjectRoot {
        self.store.root()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// Rebuild the catalog from the file, discarding the previous one.
    pub fn reload(&mut self) -> Result<&VersionCatalog, AppError> {
        self.catalog = versions::load(&self.store)?;
        Ok(&self.catalog)
    }

    /// Rewrite `.env`; the in-memory active value changes only if that succeeds.
    pub fn set_active(&mut self, slot: Slot, value: &str) -> Result<RewriteSummary, AppError> {
        let outcome = versions::set(&self.store, slot, value)?;
        self.catalog.set_active(slot, value);
        Ok(outcome.summary)
    }
}
