use serde::{Deserialize, Serialize};

/// A single price quote taken from the upstream price board.
///
/// Quotes carry no date; the collector stamps them with the current
/// Vietnam-local date when they are written to the CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub gold_type: String,
    pub buy_price: u64,
    pub sell_price: u64,
}
