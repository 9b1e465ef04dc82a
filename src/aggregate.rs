use indexmap::IndexMap;

use crate::types::{LensStats, LensTotals, ReportRow};

/// Accumulates per-catalog lens rows into cross-catalog totals.
///
/// Lenses are keyed by their exact string value; no normalization of
/// casing or whitespace is applied, so the same physical lens encoded
/// differently by different catalog versions counts as distinct lenses.
#[derive(Debug, Default)]
pub struct Aggregate {
    lenses: IndexMap<String, LensTotals>,
}

impl Aggregate {
    pub fn new() -> Self {
        Aggregate::default()
    }

    /// Folds one catalog's rows into the running totals.
    pub fn add_catalog(&mut self, project_name: &str, rows: &[LensStats]) {
        for row in rows {
            let entry = self.lenses.entry(row.lens_name.clone()).or_default();
            entry.absorb(row, project_name);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    /// Report rows sorted by descending total photo count, lens name as
    /// the tiebreaker.
    pub fn into_sorted_rows(self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .lenses
            .into_iter()
            .map(|(lens_name, totals)| ReportRow::from_totals(lens_name, totals))
            .collect();
        rows.sort_by(|a, b| {
            b.total_photos
                .cmp(&a.total_photos)
                .then_with(|| a.lens_name.cmp(&b.lens_name))
        });
        rows
    }
}
