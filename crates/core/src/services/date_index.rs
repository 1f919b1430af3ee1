use std::collections::BTreeSet;

use crate::models::price::PriceRecord;

/// Distinct observation dates of a dataset, newest first.
///
/// Built once per load. `previous` answers "which observed date comes right
/// before this one", the baseline used for day-over-day deltas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateIndex {
    /// Distinct dates, descending
    dates: Vec<String>,
}

impl DateIndex {
    pub fn build(records: &[PriceRecord]) -> Self {
        let distinct: BTreeSet<&str> = records.iter().map(|r| r.date.as_str()).collect();
        let dates = distinct.into_iter().rev().map(str::to_string).collect();
        Self { dates }
    }

    /// Distinct dates, newest first (selection-list order).
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Distinct dates, oldest first (chart order).
    pub fn ascending(&self) -> impl Iterator<Item = &str> + '_ {
        self.dates.iter().rev().map(String::as_str)
    }

    /// The newest observed date.
    pub fn latest(&self) -> Option<&str> {
        self.dates.first().map(String::as_str)
    }

    /// The oldest observed date.
    pub fn earliest(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }

    pub fn contains(&self, date: &str) -> bool {
        self.position(date).is_some()
    }

    /// The observed date immediately older than `date`.
    ///
    /// `None` when `date` is the oldest one (no baseline) or was never
    /// observed.
    pub fn previous(&self, date: &str) -> Option<&str> {
        let idx = self.position(date)?;
        self.dates.get(idx + 1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    // Descending order, so compare in reverse (O(log n)).
    fn position(&self, date: &str) -> Option<usize> {
        self.dates
            .binary_search_by(|probe| date.cmp(probe.as_str()))
            .ok()
    }
}
