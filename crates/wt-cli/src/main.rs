use std::io::stdout;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{delete, end, export, report, start, status, task};
use wt_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<wt_db::Database> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    wt_db::Database::open(&config.database_path).context("failed to open database")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let now = Utc::now();
    let mut out = stdout();

    match &cli.command {
        Some(Commands::Start { date }) => {
            let mut db = open_database(cli.config.as_deref())?;
            start::run(&mut db, &mut out, *date, now)?;
        }
        Some(Commands::Task { text }) => {
            let mut db = open_database(cli.config.as_deref())?;
            task::run(&mut db, &mut out, text, now)?;
        }
        Some(Commands::End { day }) => {
            let mut db = open_database(cli.config.as_deref())?;
            end::run(&mut db, &mut out, day.as_deref(), now)?;
        }
        Some(Commands::Delete { day }) => {
            let mut db = open_database(cli.config.as_deref())?;
            delete::run(&mut db, &mut out, day)?;
        }
        Some(Commands::Status) => {
            let db = open_database(cli.config.as_deref())?;
            status::run(&db, &mut out, now)?;
        }
        Some(Commands::Report { json }) => {
            let db = open_database(cli.config.as_deref())?;
            report::run(&db, &mut out, *json, now)?;
        }
        Some(Commands::Export { output }) => {
            let db = open_database(cli.config.as_deref())?;
            export::run(&db, &mut out, output.as_deref(), now)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
