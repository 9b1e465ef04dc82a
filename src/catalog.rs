use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};

use crate::types::{LensStats, RatingBreakdown};

/// Controls for the per-catalog aggregation query.
pub struct ReadOptions {
    /// Capture-time window in days, evaluated against the catalog's own clock.
    pub days_back: u32,
    /// Order rows by descending photo count in SQL. Aggregation mode leaves
    /// rows unordered and sorts globally after merging.
    pub ordered: bool,
    /// Also count distinct photos per star rating and pick flag.
    pub breakdown: bool,
}

const BASE_COLUMNS: &str = "\
    lens.value AS lens_name,
    COUNT(DISTINCT img.id_local) AS photo_count,
    COUNT(DISTINCT CASE
        WHEN (img.rating >= 1 OR img.pick = 1)
        THEN img.id_local
    END) AS rated_or_picked_count";

const BREAKDOWN_COLUMNS: &str = ",
    COUNT(DISTINCT CASE WHEN img.rating = 1 THEN img.id_local END) AS star_1,
    COUNT(DISTINCT CASE WHEN img.rating = 2 THEN img.id_local END) AS star_2,
    COUNT(DISTINCT CASE WHEN img.rating = 3 THEN img.id_local END) AS star_3,
    COUNT(DISTINCT CASE WHEN img.rating = 4 THEN img.id_local END) AS star_4,
    COUNT(DISTINCT CASE WHEN img.rating = 5 THEN img.id_local END) AS star_5,
    COUNT(DISTINCT CASE WHEN img.pick = 1 THEN img.id_local END) AS picked";

/// Reads per-lens statistics from a Lightroom catalog.
///
/// The catalog is opened strictly read-only and the connection is dropped
/// before this function returns. Photos are joined to their harvested EXIF
/// metadata and the interned lens table; rows with a NULL lens value or a
/// capture time outside the lookback window are excluded.
///
/// # Errors
/// Returns an error if the catalog cannot be opened or queried (missing
/// file, lock, corruption, missing tables).
#[allow(clippy::cast_sign_loss)]
pub fn read_lens_stats(catalog: &Path, opts: &ReadOptions) -> Result<Vec<LensStats>> {
    let conn = Connection::open_with_flags(catalog, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open catalog {}", catalog.display()))?;

    let mut sql = format!(
        "SELECT\n{}{}\n\
         FROM Adobe_images img\n\
         INNER JOIN AgHarvestedExifMetadata exif\n\
             ON img.id_local = exif.image\n\
         INNER JOIN AgInternedExifLens lens\n\
             ON exif.lensRef = lens.id_local\n\
         WHERE lens.value IS NOT NULL\n\
             AND img.captureTime >= datetime('now', ?1)\n\
         GROUP BY lens.value",
        BASE_COLUMNS,
        if opts.breakdown { BREAKDOWN_COLUMNS } else { "" },
    );
    if opts.ordered {
        sql.push_str("\nORDER BY photo_count DESC");
    }

    let mut stmt = conn
        .prepare(&sql)
        .with_context(|| format!("failed to query catalog {}", catalog.display()))?;

    let window = format!("-{} days", opts.days_back);
    let rows = stmt
        .query_map([&window], |row| {
            let lens_name: String = row.get(0)?;
            let photo_count: i64 = row.get(1)?;
            let rated_or_picked: i64 = row.get(2)?;
            let breakdown = if opts.breakdown {
                Some(RatingBreakdown {
                    star_1: row.get::<_, i64>(3)? as u64,
                    star_2: row.get::<_, i64>(4)? as u64,
                    star_3: row.get::<_, i64>(5)? as u64,
                    star_4: row.get::<_, i64>(6)? as u64,
                    star_5: row.get::<_, i64>(7)? as u64,
                    picked: row.get::<_, i64>(8)? as u64,
                })
            } else {
                None
            };
            Ok(LensStats {
                lens_name,
                photo_count: photo_count as u64,
                rated_or_picked: rated_or_picked as u64,
                breakdown,
            })
        })
        .with_context(|| format!("failed to query catalog {}", catalog.display()))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to query catalog {}", catalog.display()))?;

    Ok(rows)
}
