//! `logs show` and `logs clear` commands.

use std::path::PathBuf;

use clap::Subcommand;
use dialoguer::Confirm;

use crate::app::api::{self, LogOutcome, LogQuery};
use crate::domain::AppError;
use crate::domain::logs::parse_date;

use super::Globals;

#[derive(Subcommand)]
pub(super) enum LogsCommands {
    /// Print the PHP error log, optionally limited to a date/time range
    Show {
        /// Start date, YYYY-MM-DD (enables filtering; default today)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,
        /// Start time, HH:MM:SS (default from settings)
        #[arg(long, value_name = "TIME")]
        from_time: Option<String>,
        /// End date, YYYY-MM-DD (enables filtering; default today)
        #[arg(long, value_name = "DATE")]
        to: Option<String>,
        /// End time, HH:MM:SS (default from settings)
        #[arg(long, value_name = "TIME")]
        to_time: Option<String>,
        /// Read this file instead of the log of the active PHP server
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Truncate the PHP error log
    Clear {
        /// Log file to truncate instead of the active PHP server's log
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub(super) fn run_logs(globals: &Globals, command: LogsCommands) -> Result<(), AppError> {
    let settings = globals.settings()?;
    let root = globals.project_root(&settings)?;

    match command {
        LogsCommands::Show { from, from_time, to, to_time, file } => {
            let query = LogQuery {
                from_date: from.as_deref().map(parse_date).transpose()?,
                from_time,
                to_date: to.as_deref().map(parse_date).transpose()?,
                to_time,
                file,
            };
            let view = api::show_log(root.path(), &settings, &query)?;
            match view.outcome {
                LogOutcome::Entries(text) => print!("{}", text),
                LogOutcome::Empty => println!("Log file is empty."),
                LogOutcome::NoMatches => {
                    println!("No log entries found in the specified date range.")
                }
            }
        }
        LogsCommands::Clear { file, yes } => {
            let path = api::locate_log(root.path(), file.as_deref())?;
            if !yes && !confirm_clear(&path)? {
                println!("Cancelled");
                return Ok(());
            }
            api::clear_log(root.path(), Some(&path))?;
            println!("✅ Cleared {}", path.display());
        }
    }
    Ok(())
}

fn confirm_clear(path: &std::path::Path) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!("Clear {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|err| AppError::Validation(format!("Failed to read confirmation: {}", err)))
}
