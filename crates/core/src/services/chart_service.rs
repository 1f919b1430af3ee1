use crate::models::chart::SeriesProjection;
use crate::models::price::PriceRecord;

/// Generates chart-ready series from the loaded dataset.
///
/// The core computes the numbers, the frontend only renders. Records are
/// already date-ascending from the parser, so no sorting happens here.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the buy/sell series of one category.
    ///
    /// An unknown category gives an empty projection (`is_empty()`).
    pub fn project(&self, records: &[PriceRecord], category: &str) -> SeriesProjection {
        let mut series = SeriesProjection::default();
        self.refill(&mut series, records, category);
        series
    }

    /// Replace the contents of `series` with `category`'s data in place.
    ///
    /// Lets a presentation layer keep one chart handle and swap its data
    /// on selection change instead of tearing the chart down.
    pub fn refill(&self, series: &mut SeriesProjection, records: &[PriceRecord], category: &str) {
        series.category.clear();
        series.category.push_str(category);
        series.dates.clear();
        series.buy.clear();
        series.sell.clear();

        for record in records.iter().filter(|r| r.category == category) {
            series.dates.push(record.date.clone());
            series.buy.push(record.buy_price);
            series.sell.push(record.sell_price);
        }
    }

    /// Distinct categories in order of first appearance.
    pub fn categories<'a>(&self, records: &'a [PriceRecord]) -> Vec<&'a str> {
        let mut seen = std::collections::HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.as_str())
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
