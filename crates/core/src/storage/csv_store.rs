use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::price::ISO_DATE_FORMAT;
use crate::models::quote::Quote;
use crate::models::settings::DEFAULT_CATEGORY_COLUMN;
use crate::services::parser_service::ParserService;

/// Header written to a fresh price file with the default category column.
pub const CSV_HEADER: &str = "date,gold_type,buy_price,sell_price";

/// Append-only price file written by the collector.
///
/// Each (date, gold type) pair is recorded at most once; re-running the
/// collector on the same day writes nothing.
pub struct CsvStore {
    path: PathBuf,
    category_column: String,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
        }
    }

    /// Use a different header name for the category column, both when
    /// reading existing rows and when writing a fresh header.
    pub fn with_category_column(mut self, column: impl Into<String>) -> Self {
        self.category_column = column.into().trim().to_string();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category_column(&self) -> &str {
        &self.category_column
    }

    /// Header line for a fresh file.
    pub fn header(&self) -> String {
        format!("date,{},buy_price,sell_price", self.category_column)
    }

    /// The (date, gold type) pairs already in the file.
    pub fn existing_pairs(&self) -> Result<HashSet<(String, String)>, CoreError> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(ParserService::new()
            .with_category_column(self.category_column.clone())
            .parse(&text)
            .into_iter()
            .map(|r| (r.date, r.category))
            .collect())
    }

    /// Append `quotes` stamped with `date`, skipping pairs already stored.
    ///
    /// Creates the parent directory and the header line when needed.
    /// Returns the quotes actually written, in input order; an empty vector
    /// means the day was already recorded.
    pub fn append_quotes(
        &self,
        quotes: &[Quote],
        date: NaiveDate,
    ) -> Result<Vec<Quote>, CoreError> {
        let date_str = date.format(ISO_DATE_FORMAT).to_string();

        for quote in quotes {
            if quote.gold_type.contains(',') || quote.gold_type.contains('\n') {
                return Err(CoreError::Serialization(format!(
                    "Gold type '{}' cannot be stored in an unquoted CSV field",
                    quote.gold_type
                )));
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let current = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let mut seen = self.existing_pairs()?;
        let new_rows: Vec<Quote> = quotes
            .iter()
            .filter(|q| seen.insert((date_str.clone(), q.gold_type.clone())))
            .cloned()
            .collect();

        if new_rows.is_empty() {
            debug!(date = %date_str, path = %self.path.display(), "prices already recorded");
            return Ok(Vec::new());
        }

        let mut out = String::new();
        if current.is_empty() {
            out.push_str(&self.header());
            out.push('\n');
        } else if current.last() != Some(&b'\n') {
            out.push('\n');
        }
        for quote in &new_rows {
            out.push_str(&format!(
                "{},{},{},{}\n",
                date_str, quote.gold_type, quote.buy_price, quote.sell_price
            ));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(out.as_bytes())?;

        Ok(new_rows)
    }
}
