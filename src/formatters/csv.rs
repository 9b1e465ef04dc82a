use std::path::Path;

use anyhow::{Context, Result};

use crate::types::ReportRow;

/// Writes report rows as CSV. Column layout follows the rows themselves:
/// breakdown and project columns appear when the rows carry them, so the
/// caller must pass uniform rows. Quoting of embedded commas and quotes
/// is handled by the writer.
pub fn write(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;

    let with_breakdown = rows.first().is_some_and(|r| r.breakdown.is_some());
    let with_projects = rows.first().is_some_and(|r| r.projects.is_some());

    let mut header: Vec<&str> = vec!["lens_name", "total_photos"];
    if with_breakdown {
        header.extend(["1_star", "2_star", "3_star", "4_star", "5_star", "picked"]);
    }
    header.extend(["rated_or_picked", "keeper_percentage"]);
    if with_projects {
        header.extend(["project_count", "projects"]);
    }
    wtr.write_record(&header)
        .with_context(|| format!("failed to write output file {}", path.display()))?;

    for row in rows {
        let mut record: Vec<String> = vec![row.lens_name.clone(), row.total_photos.to_string()];
        if let Some(b) = &row.breakdown {
            record.extend([
                b.star_1.to_string(),
                b.star_2.to_string(),
                b.star_3.to_string(),
                b.star_4.to_string(),
                b.star_5.to_string(),
                b.picked.to_string(),
            ]);
        }
        record.push(row.rated_or_picked.to_string());
        record.push(format!("{:.1}", row.keeper_percentage));
        if let Some(projects) = &row.projects {
            record.push(projects.len().to_string());
            record.push(projects.join(", "));
        }
        wtr.write_record(&record)
            .with_context(|| format!("failed to write output file {}", path.display()))?;
    }

    wtr.flush()
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    Ok(())
}
