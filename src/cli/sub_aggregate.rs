use anyhow::{Result, bail};

use crate::aggregate::Aggregate;
use crate::catalog::{self, ReadOptions};
use crate::discovery;
use crate::formatters::{self, summary};

use super::AggregateArgs;

/// Lookback for aggregation runs; not configurable in this mode.
const AGGREGATE_DAYS_BACK: u32 = 365;

pub fn run_aggregate(args: &AggregateArgs) -> Result<()> {
    if !args.root.is_dir() {
        bail!("{} is not a valid directory", args.root.display());
    }

    println!("Scanning for Lightroom catalogs in: {}", args.root.display());
    println!("{}", summary::separator());

    let catalogs = discovery::find_catalogs(&args.root);
    for catalog_ref in &catalogs {
        println!("Found catalog: {}", catalog_ref.project_name);
        if args.verbose > 0 {
            eprintln!("  at {}", catalog_ref.path.display());
        }
    }

    if catalogs.is_empty() {
        println!();
        println!("No Lightroom catalogs found matching the pattern:");
        println!("  */2_RESOURCES/Catalog/Catalog.lrcat");
        bail!("no catalogs found");
    }

    println!();
    println!("Found {} catalog(s)", catalogs.len());
    println!("{}", summary::separator());

    let pb = if args.progress {
        let pb = indicatif::ProgressBar::new(catalogs.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} catalogs {wide_bar} {eta}")
                .unwrap()
                .tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        Some(pb)
    } else {
        None
    };

    let opts = ReadOptions {
        days_back: AGGREGATE_DAYS_BACK,
        ordered: false,
        breakdown: false,
    };
    let mut aggregate = Aggregate::new();
    for catalog_ref in &catalogs {
        if pb.is_none() {
            println!();
            println!("Processing: {}", catalog_ref.project_name);
        }
        // One open/query/close cycle per catalog; a bad catalog is logged
        // and skipped so the batch continues.
        let rows = match catalog::read_lens_stats(&catalog_ref.path, &opts) {
            Ok(rows) => rows,
            Err(err) => {
                eprintln!("Error reading {}: {err:#}", catalog_ref.path.display());
                Vec::new()
            }
        };
        if args.verbose > 0 {
            eprintln!("{}: {} lens rows", catalog_ref.project_name, rows.len());
        }
        aggregate.add_catalog(&catalog_ref.project_name, &rows);
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if aggregate.is_empty() {
        println!();
        println!("No lens data found in any catalog.");
        println!("This could mean:");
        println!("  - No photos in the last {AGGREGATE_DAYS_BACK} days");
        println!("  - Photos don't have lens EXIF data");
        println!("  - Catalog metadata hasn't been harvested yet");
        bail!("no lens data found across {} catalogs", catalogs.len());
    }

    let lens_count = aggregate.len();
    let rows = aggregate.into_sorted_rows();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!();
    println!("{}", summary::separator());
    println!("Writing results to: {}", args.output.display());
    formatters::csv::write(&args.output, &rows)?;

    println!();
    println!("Done! Processed {} catalogs", catalogs.len());
    println!("Found statistics for {lens_count} lenses");
    Ok(())
}
