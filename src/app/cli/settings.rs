//! `config` command.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

use super::Globals;

#[derive(Subcommand)]
pub(super) enum ConfigCommands {
    /// Print the effective settings and where they are read from
    Show,
    /// Store a validated Devilbox directory as the default project root
    SetRoot {
        /// Devilbox checkout
        path: PathBuf,
    },
}

pub(super) fn run_config(globals: &Globals, command: ConfigCommands) -> Result<(), AppError> {
    let path = globals.settings_path()?;
    match command {
        ConfigCommands::Show => {
            let settings = api::load_settings(&path)?;
            println!("# {}", path.display());
            print!("{}", api::render_settings(&settings)?);
        }
        ConfigCommands::SetRoot { path: root } => {
            let root = api::set_root(&path, &root)?;
            println!("✅ Project root set to {}", root.path().display());
        }
    }
    Ok(())
}
