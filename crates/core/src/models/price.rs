use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format used by the CSV file and every date key in this crate.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One observation: the buy/sell price of a gold category on a given date.
///
/// `date` stays in its ISO-8601 string form. The format is lexically
/// sortable, so comparing strings orders records chronologically, and a
/// row with an odd date is still kept rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation date (`YYYY-MM-DD`)
    pub date: String,

    /// Price instrument (e.g., "Nhẫn 999.9")
    pub category: String,

    /// Buy price in the smallest currency unit
    pub buy_price: u64,

    /// Sell price in the smallest currency unit
    pub sell_price: u64,

    /// Any other columns of the row, keyed by header name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl PriceRecord {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        buy_price: u64,
        sell_price: u64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            buy_price,
            sell_price,
            extra: BTreeMap::new(),
        }
    }

    /// The record date as a calendar date, if it is a valid ISO date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ISO_DATE_FORMAT).ok()
    }
}
