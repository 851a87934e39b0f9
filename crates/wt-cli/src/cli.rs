//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Single-user workday tracker.
///
/// Records workdays with timestamped task notes and computes elapsed hours
/// over the running history.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new workday.
    Start {
        /// Calendar date the day represents (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Add a task note to the active workday.
    Task {
        /// Task description.
        text: String,
    },

    /// End a workday.
    End {
        /// Day ID to end. Defaults to the active day.
        #[arg(long)]
        day: Option<String>,
    },

    /// Delete a workday, active or closed.
    Delete {
        /// Day ID to delete.
        day: String,
    },

    /// Show the active workday.
    Status,

    /// Show the full work history with computed hours.
    Report {
        /// Emit the report summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Write the work summary document to a file.
    Export {
        /// Output path. Defaults to ./work-summary.txt.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
