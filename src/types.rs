use serde::Serialize;

/// Per-lens counts read from a single catalog.
#[derive(Debug, Clone, Serialize)]
pub struct LensStats {
    pub lens_name: String,
    pub photo_count: u64,
    pub rated_or_picked: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<RatingBreakdown>,
}

/// Distinct photo counts per star rating plus the pick flag.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RatingBreakdown {
    #[serde(rename = "1_star")]
    pub star_1: u64,
    #[serde(rename = "2_star")]
    pub star_2: u64,
    #[serde(rename = "3_star")]
    pub star_3: u64,
    #[serde(rename = "4_star")]
    pub star_4: u64,
    #[serde(rename = "5_star")]
    pub star_5: u64,
    pub picked: u64,
}

/// Running totals for one lens across catalogs.
#[derive(Debug, Clone, Default)]
pub struct LensTotals {
    pub photo_count: u64,
    pub rated_or_picked: u64,
    /// Projects that contributed at least one photo, in discovery order.
    /// Append-only; a project discovered twice appears twice.
    pub projects: Vec<String>,
}

impl LensTotals {
    pub fn absorb(&mut self, row: &LensStats, project_name: &str) {
        self.photo_count += row.photo_count;
        self.rated_or_picked += row.rated_or_picked;
        if row.photo_count > 0 {
            self.projects.push(project_name.to_string());
        }
    }
}

/// A finished output row, shared by the CSV and JSON writers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub lens_name: String,
    pub total_photos: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<RatingBreakdown>,
    pub rated_or_picked: u64,
    pub keeper_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
}

impl ReportRow {
    pub fn from_stats(stats: &LensStats) -> Self {
        ReportRow {
            lens_name: stats.lens_name.clone(),
            total_photos: stats.photo_count,
            breakdown: stats.breakdown,
            rated_or_picked: stats.rated_or_picked,
            keeper_percentage: keeper_percentage(stats.photo_count, stats.rated_or_picked),
            project_count: None,
            projects: None,
        }
    }

    pub fn from_totals(lens_name: String, totals: LensTotals) -> Self {
        let keeper = keeper_percentage(totals.photo_count, totals.rated_or_picked);
        ReportRow {
            lens_name,
            total_photos: totals.photo_count,
            breakdown: None,
            rated_or_picked: totals.rated_or_picked,
            keeper_percentage: keeper,
            project_count: Some(totals.projects.len()),
            projects: Some(totals.projects),
        }
    }
}

/// Keeper rate as a percentage rounded to one decimal place.
/// Defined as 0.0 when there are no photos.
#[allow(clippy::cast_precision_loss)]
pub fn keeper_percentage(photo_count: u64, rated_or_picked: u64) -> f64 {
    if photo_count == 0 {
        return 0.0;
    }
    let pct = 100.0 * rated_or_picked as f64 / photo_count as f64;
    (pct * 10.0).round() / 10.0
}
