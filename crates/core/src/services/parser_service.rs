use crate::models::price::PriceRecord;
use crate::models::settings::DEFAULT_CATEGORY_COLUMN;

/// Rows with fewer fields than this are dropped.
pub const MIN_FIELDS: usize = 4;

const DATE_COLUMN: &str = "date";
const BUY_COLUMN: &str = "buy_price";
const SELL_COLUMN: &str = "sell_price";

/// Counts of what the parser tolerated while reading a file.
///
/// The parser itself never reports these; callers that want to surface a
/// warning ask for them via `parse_with_report`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Data lines dropped for having fewer than `MIN_FIELDS` fields
    pub skipped_rows: usize,

    /// Price fields that failed to parse and were set to 0
    pub zero_filled_prices: usize,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_rows == 0 && self.zero_filled_prices == 0
    }
}

/// Turns comma-delimited price text into date-ordered records.
///
/// The format is deliberately simple: one header line, one record per line,
/// plain `,` separators with no quoting or escaping. Whitespace around
/// every name and value is trimmed.
///
/// Pure logic, no I/O.
pub struct ParserService {
    category_column: String,
}

impl ParserService {
    pub fn new() -> Self {
        Self {
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
        }
    }

    /// Use a different header name for the category column.
    pub fn with_category_column(mut self, column: impl Into<String>) -> Self {
        self.category_column = column.into().trim().to_string();
        self
    }

    pub fn category_column(&self) -> &str {
        &self.category_column
    }

    /// Parse `text` into records sorted ascending by date.
    ///
    /// Never fails: text with no data lines gives an empty vector, short
    /// rows are skipped and bad prices become 0.
    pub fn parse(&self, text: &str) -> Vec<PriceRecord> {
        self.parse_with_report(text).0
    }

    /// Same as `parse`, also returning what was skipped or zero-filled.
    pub fn parse_with_report(&self, text: &str) -> (Vec<PriceRecord>, ParseReport) {
        let mut report = ParseReport::default();
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            return (Vec::new(), report);
        }

        let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();

        let mut records = Vec::with_capacity(lines.len() - 1);
        for line in &lines[1..] {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            if values.len() < MIN_FIELDS {
                report.skipped_rows += 1;
                continue;
            }
            records.push(self.build_record(&headers, &values, &mut report));
        }

        // Stable: rows sharing a date keep their file order.
        records.sort_by(|a, b| a.date.cmp(&b.date));
        (records, report)
    }

    /// Map one row's values onto the header names.
    fn build_record(
        &self,
        headers: &[&str],
        values: &[&str],
        report: &mut ParseReport,
    ) -> PriceRecord {
        let mut record = PriceRecord::new("", "", 0, 0);

        for (name, value) in headers.iter().zip(values.iter()) {
            match *name {
                DATE_COLUMN => record.date = (*value).to_string(),
                BUY_COLUMN => record.buy_price = parse_price(value, report),
                SELL_COLUMN => record.sell_price = parse_price(value, report),
                n if n == self.category_column => record.category = (*value).to_string(),
                n => {
                    record.extra.insert(n.to_string(), (*value).to_string());
                }
            }
        }

        record
    }
}

impl Default for ParserService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the default `gold_type` category column.
pub fn parse_prices(text: &str) -> Vec<PriceRecord> {
    ParserService::new().parse(text)
}

/// Integer price, or 0 (counted in `report`) when the value is not one.
fn parse_price(value: &str, report: &mut ParseReport) -> u64 {
    match value.parse::<u64>() {
        Ok(price) => price,
        Err(_) => {
            report.zero_filled_prices += 1;
            0
        }
    }
}

