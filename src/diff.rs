//! Per-section size differences between a baseline and a candidate table

use crate::extractor::SectionSizeTable;

/// One changed section in a comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRow {
    /// Section name
    pub name: String,
    /// Size in the baseline file
    pub baseline: u64,
    /// Size in the candidate file (0 when absent)
    pub candidate: u64,
    /// Candidate minus baseline (negative = reduction)
    pub delta: i128,
    /// Delta relative to the baseline size, in percent
    pub percent: f64,
}

/// Compare two section tables.
///
/// Rows are keyed on the baseline's sections only, sorted by name, and
/// unchanged sections are left out. Sections only present in the candidate
/// never appear.
///
/// # Examples
///
/// ```
/// use exesizecmp::diff::diff_tables;
/// use exesizecmp::extractor::SectionSizeTable;
///
/// let before: SectionSizeTable = [(".text".to_string(), 1000)].into_iter().collect();
/// let after: SectionSizeTable = [(".text".to_string(), 1100)].into_iter().collect();
///
/// let rows = diff_tables(&before, &after);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].delta, 100);
/// assert_eq!(format!("{:.1}", rows[0].percent), "10.0");
/// ```
pub fn diff_tables(baseline: &SectionSizeTable, candidate: &SectionSizeTable) -> Vec<DiffRow> {
    baseline
        .iter()
        .filter_map(|(name, before)| {
            let after = candidate.size_of(name);
            let delta = i128::from(after) - i128::from(before);
            if delta == 0 {
                return None;
            }

            // Zero-size sections never make it into a table
            let percent = delta as f64 * 100.0 / before as f64;

            Some(DiffRow {
                name: name.to_string(),
                baseline: before,
                candidate: after,
                delta,
                percent,
            })
        })
        .collect()
}
