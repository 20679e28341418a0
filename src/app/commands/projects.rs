use crate::domain::{AppError, Project};
use crate::ports::ProjectStore;

pub fn execute(store: &impl ProjectStore) -> Result<Vec<Project>, AppError> {
    store.list_projects()
}
