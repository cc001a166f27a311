//! WPT Results Diff CLI
//!
//! Compares two web-platform-tests run summaries and reports which test
//! files were added, deleted, or changed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use wpt_results_diff::commands::{
    display_version, execute_diff, validate_args, validate_snapshot_file, DiffArgs,
};
use wpt_results_diff::utils::config::DEFAULT_REPORT_PATH;

/// WPT Results Diff - per-test pass/total comparison
#[derive(Parser, Debug)]
#[command(name = "wpt-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Diff two run summaries
    Diff {
        /// Summary JSON of the earlier run
        #[arg(short, long)]
        before: PathBuf,

        /// Summary JSON of the later run
        #[arg(short, long)]
        after: PathBuf,

        /// Report paths whose subtest count grew
        #[arg(long)]
        added: bool,

        /// Report paths whose subtest count shrank
        #[arg(long)]
        deleted: bool,

        /// Report paths whose pass count changed
        #[arg(long)]
        changed: bool,

        /// Restrict to paths starting with this prefix (repeatable)
        #[arg(short, long = "path")]
        paths: Vec<String>,

        /// TOML filter file; category and path flags override it
        #[arg(long, env = "WPT_DIFF_FILTER")]
        filter_file: Option<PathBuf>,

        /// Write the full JSON report here instead of printing deltas
        #[arg(short, long, default_missing_value = DEFAULT_REPORT_PATH, num_args = 0..=1)]
        output: Option<PathBuf>,
    },

    /// Validate a run summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Diff {
            before,
            after,
            added,
            deleted,
            changed,
            paths,
            filter_file,
            output,
        } => {
            let args = DiffArgs {
                before,
                after,
                added,
                deleted,
                changed,
                paths,
                filter_file,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_diff(args)?;
        }

        Commands::Validate { file } => {
            validate_snapshot_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
