use crate::models::price::PriceRecord;
use crate::models::table::{TableProjection, TableRow};
use super::date_index::DateIndex;

/// Builds the per-date price table with day-over-day changes.
///
/// Pure function of (dataset, date): calling it twice with the same inputs
/// gives equal results, and nothing is cached between calls.
pub struct TableService;

impl TableService {
    pub fn new() -> Self {
        Self
    }

    /// Project `records` onto `date`.
    ///
    /// 1. Collect the records observed on `date`; none → `NoData`.
    /// 2. Find the previous observed date via `index`.
    /// 3. For each category, subtract the previous price (first match).
    ///    No previous date or no matching category → delta 0.
    ///
    /// Rows keep the order in which categories appear on `date`.
    pub fn project(&self, records: &[PriceRecord], index: &DateIndex, date: &str) -> TableProjection {
        let current: Vec<&PriceRecord> = records.iter().filter(|r| r.date == date).collect();
        if current.is_empty() {
            return TableProjection::NoData {
                date: date.to_string(),
            };
        }

        let previous: Vec<&PriceRecord> = match index.previous(date) {
            Some(prev_date) => records.iter().filter(|r| r.date == prev_date).collect(),
            None => Vec::new(),
        };

        let rows = current
            .iter()
            .map(|record| {
                let baseline = previous.iter().find(|p| p.category == record.category);
                let (buy_delta, sell_delta) = match baseline {
                    Some(prev) => (
                        signed_diff(record.buy_price, prev.buy_price),
                        signed_diff(record.sell_price, prev.sell_price),
                    ),
                    None => (0, 0),
                };
                TableRow {
                    category: record.category.clone(),
                    buy_price: record.buy_price,
                    sell_price: record.sell_price,
                    buy_delta,
                    sell_delta,
                }
            })
            .collect();

        TableProjection::Rows {
            date: date.to_string(),
            rows,
        }
    }
}

impl Default for TableService {
    fn default() -> Self {
        Self::new()
    }
}

/// `current - previous` as a signed value, saturating at the `i64` bounds.
fn signed_diff(current: u64, previous: u64) -> i64 {
    let diff = i128::from(current) - i128::from(previous);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}
