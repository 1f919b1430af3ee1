use serde::{Deserialize, Serialize};

/// Chart-ready time series for one category.
///
/// The three vectors are index-aligned: `dates[i]`, `buy[i]` and `sell[i]`
/// all describe the same record. Dates are ascending. Missing days are not
/// filled in; the renderer decides whether to connect or break the line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesProjection {
    pub category: String,
    pub dates: Vec<String>,
    pub buy: Vec<u64>,
    pub sell: Vec<u64>,
}

impl SeriesProjection {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// `true` when the category matched no records (the no-data state).
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate `(date, buy, sell)` triples in chart order.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64, u64)> + '_ {
        self.dates
            .iter()
            .zip(self.buy.iter().zip(self.sell.iter()))
            .map(|(d, (b, s))| (d.as_str(), *b, *s))
    }
}
