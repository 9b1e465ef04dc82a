use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Result, bail};

use crate::catalog::{self, ReadOptions};
use crate::formatters::{self, summary};
use crate::types::ReportRow;

use super::Args;

pub fn run_with_args(args: &Args, catalog_path: &Path) -> Result<()> {
    if !catalog_path.exists() {
        bail!("catalog file not found: {}", catalog_path.display());
    }

    if catalog_path.extension().and_then(|e| e.to_str()) != Some("lrcat") {
        println!(
            "Warning: file doesn't have .lrcat extension: {}",
            catalog_path.display()
        );
        if !args.yes && !confirm("Continue anyway? (y/n): ")? {
            bail!("aborted by user");
        }
    }

    let name = catalog_path
        .file_name()
        .map_or_else(|| catalog_path.display().to_string(), |n| n.to_string_lossy().into_owned());
    println!("Analyzing catalog: {name}");
    println!("Looking back: {} days", args.days_back);
    println!("{}", summary::separator());

    let opts = ReadOptions {
        days_back: args.days_back,
        ordered: true,
        breakdown: args.breakdown,
    };
    let stats = catalog::read_lens_stats(catalog_path, &opts)?;
    if args.verbose > 0 {
        eprintln!("Query returned {} lens rows", stats.len());
    }

    if stats.is_empty() {
        println!();
        println!("No lens data found in catalog.");
        println!("This could mean:");
        println!("  - No photos in the specified time range");
        println!("  - Photos don't have lens EXIF data");
        println!("  - Catalog metadata hasn't been harvested yet");
        bail!("no lens data found");
    }

    let rows: Vec<ReportRow> = stats.iter().map(ReportRow::from_stats).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!();
    println!("Found statistics for {} lenses", rows.len());
    println!("Writing results to: {}", args.output.display());
    formatters::csv::write(&args.output, &rows)?;

    println!();
    println!("{}", summary::separator());
    println!("✓ Done!");
    println!();
    println!("Top 5 most-used lenses:");
    print!("{}", summary::top_lenses(&rows, 5));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
