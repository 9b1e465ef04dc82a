use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;
mod sub_aggregate;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lenstat",
    version,
    about = "Lens usage statistics from Lightroom catalogs",
    long_about = None,
    subcommand_negates_reqs = true
)]
pub struct Args {
    /// Subcommand (use without subcommand for single-catalog analysis)
    #[command(subcommand)]
    pub cmd: Option<Subcommand>,

    /// Path to the Lightroom catalog (.lrcat)
    #[arg(value_name = "CATALOG", required = true, value_hint = ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Output CSV filename
    #[arg(value_name = "OUTPUT", default_value = "lens_stats.csv", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Number of days to look back
    #[arg(value_name = "DAYS_BACK", default_value_t = 365)]
    pub days_back: u32,

    /// Include per-star-rating columns in the output
    #[arg(long = "breakdown", action = ArgAction::SetTrue)]
    pub breakdown: bool,

    /// Print statistics as JSON to stdout instead of writing the CSV
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Answer yes to the extension-mismatch prompt
    #[arg(long = "yes", short = 'y', action = ArgAction::SetTrue)]
    pub yes: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    if let Some(cmd) = &args.cmd {
        return match cmd {
            Subcommand::Aggregate(agg_args) => sub_aggregate::run_aggregate(agg_args),
        };
    }
    let Some(catalog) = args.catalog.clone() else {
        bail!("missing <CATALOG> argument");
    };
    run_impl::run_with_args(&args, &catalog)
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Subcommand {
    /// Scan a directory tree for project catalogs and aggregate lens statistics
    Aggregate(AggregateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct AggregateArgs {
    /// Root folder to scan for project catalogs
    #[arg(value_name = "ROOT", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Output CSV filename
    #[arg(
        value_name = "OUTPUT",
        default_value = "lens_stats_aggregated.csv",
        value_hint = ValueHint::FilePath
    )]
    pub output: PathBuf,

    /// Print statistics as JSON to stdout instead of writing the CSV
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Show a progress bar while processing catalogs
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
