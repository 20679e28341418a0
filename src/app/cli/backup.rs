//! `backup` command.

use std::path::PathBuf;

use clap::Args;

use crate::app::api;
use crate::domain::{AppError, BackupRequest};

use super::Globals;

#[derive(Args)]
pub(super) struct BackupArgs {
    /// Directory to scan
    #[arg(short, long, value_name = "DIR")]
    source: PathBuf,
    /// Directory receiving the copies
    #[arg(short, long, value_name = "DIR")]
    target: PathBuf,
    /// Extensions to include, separated by ',' or ';' (default from settings)
    #[arg(short, long, value_name = "LIST")]
    ext: Option<String>,
    /// Only files modified within this many days (default from settings)
    #[arg(short, long, allow_negative_numbers = true)]
    days: Option<i64>,
    /// Do not descend into subdirectories
    #[arg(long)]
    no_subdirs: bool,
}

pub(super) fn run_backup(globals: &Globals, args: BackupArgs) -> Result<(), AppError> {
    let defaults = globals.settings()?.backup;
    let request = BackupRequest::new(args.source, args.target)
        .with_extensions(args.ext.as_deref().unwrap_or(&defaults.extensions))
        .with_subdirs(defaults.include_subdirs && !args.no_subdirs)
        .with_days(args.days.unwrap_or(defaults.days));

    let report = api::backup(&request, |result| match &result.error {
        Some(error) => println!("{} (Error: {})", result.status, error),
        None => println!("{}", result.status),
    })?;

    println!("{}", report.summary());
    let failed = report.failures().count();
    if failed > 0 {
        println!("⚠️  {} file(s) could not be copied", failed);
    }
    Ok(())
}
