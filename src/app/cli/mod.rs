//! CLI Adapter.

mod backup;
mod logs;
mod settings;
mod versions;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::{api, config};
use crate::domain::{AppError, ProjectRoot, Settings};

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "BOXCTL_LOG";

#[derive(Parser)]
#[command(name = "boxctl")]
#[command(version)]
#[command(
    about = "Manage a local Devilbox checkout: server versions, backups and PHP logs",
    long_about = None
)]
struct Cli {
    /// Devilbox project root (default: configured root, then current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Settings file (default: $BOXCTL_CONFIG, then ~/.boxctl/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the project root contains .env and docker-compose.yml
    Check,
    /// Show active and available server versions
    #[clap(visible_alias = "v")]
    Versions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch a slot (php, httpd, mysql) to another version
    #[clap(visible_alias = "u")]
    Use {
        /// Slot name
        slot: String,
        /// New value; prompts with the known values when omitted
        value: Option<String>,
    },
    /// List projects under data/www
    #[clap(visible_alias = "p")]
    Projects,
    /// Copy recently modified files into a backup directory
    #[clap(visible_alias = "b")]
    Backup(backup::BackupArgs),
    /// Show or clear the PHP error log
    #[clap(visible_alias = "l")]
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        command: settings::ConfigCommands,
    },
}

/// Options shared by every command.
struct Globals {
    root: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl Globals {
    fn settings_path(&self) -> Result<PathBuf, AppError> {
        config::settings_path(self.config.as_deref())
    }

    fn settings(&self) -> Result<Settings, AppError> {
        api::load_settings(&self.settings_path()?)
    }

    fn project_root(&self, settings: &Settings) -> Result<ProjectRoot, AppError> {
        config::resolve_root(self.root.as_deref(), settings)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let globals = Globals { root: cli.root, config: cli.config };
    let result = match cli.command {
        Commands::Check => run_check(&globals),
        Commands::Versions { json } => versions::run_versions(&globals, json),
        Commands::Use { slot, value } => versions::run_use(&globals, &slot, value),
        Commands::Projects => run_projects(&globals),
        Commands::Backup(args) => backup::run_backup(&globals, args),
        Commands::Logs { command } => logs::run_logs(&globals, command),
        Commands::Config { command } => settings::run_config(&globals, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_check(globals: &Globals) -> Result<(), AppError> {
    let settings = globals.settings()?;
    let root = globals.project_root(&settings)?;
    println!("✅ Valid Devilbox project root: {}", root.path().display());
    Ok(())
}

fn run_projects(globals: &Globals) -> Result<(), AppError> {
    let settings = globals.settings()?;
    let root = globals.project_root(&settings)?;
    let projects = api::projects(root.path())?;

    if projects.is_empty() {
        println!("No projects found in {}", root.www_dir().display());
        return Ok(());
    }
    let width = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for project in &projects {
        println!("{:<width$}  {}  {}", project.name, project.url, project.htdocs.display());
    }
    Ok(())
}
