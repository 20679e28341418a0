use crate::domain::Settings;
use crate::ports::ProjectStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProjectStore> {
    store: S,
    settings: Settings,
}

impl<S: ProjectStore> AppContext<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Effective user settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
