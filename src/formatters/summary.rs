use std::fmt::Write as _;

use crate::types::ReportRow;

/// Horizontal rule printed between sections of the stdout report.
pub fn separator() -> String {
    "=".repeat(60)
}

/// Numbered "top N lenses" list with keeper percentages.
pub fn top_lenses(rows: &[ReportRow], limit: usize) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().take(limit).enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {} photos ({:.1}% keepers)",
            i + 1,
            row.lens_name,
            row.total_photos,
            row.keeper_percentage
        );
    }
    out
}
