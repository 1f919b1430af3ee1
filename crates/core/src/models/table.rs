use serde::{Deserialize, Serialize};

/// One line of the price table: a category's prices on the selected date
/// and the change since the previous observed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub category: String,
    pub buy_price: u64,
    pub sell_price: u64,

    /// `buy(D) - buy(D')`, 0 when there is no baseline
    pub buy_delta: i64,

    /// `sell(D) - sell(D')`, 0 when there is no baseline
    pub sell_delta: i64,
}

/// Result of projecting the dataset onto a single date.
///
/// `NoData` is the explicit "nothing recorded on this date" state. It is
/// never represented as `Rows` with an empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableProjection {
    Rows { date: String, rows: Vec<TableRow> },
    NoData { date: String },
}

impl TableProjection {
    /// The date this projection was computed for.
    pub fn date(&self) -> &str {
        match self {
            TableProjection::Rows { date, .. } | TableProjection::NoData { date } => date,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableProjection::Rows { rows, .. } => rows,
            TableProjection::NoData { .. } => &[],
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TableProjection::NoData { .. })
    }
}
