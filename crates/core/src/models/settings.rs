use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Default location of the price file, relative to the viewer root.
pub const DEFAULT_DATA_PATH: &str = "data/gold_prices.csv";

/// Upstream price board endpoint used by the collector.
pub const DEFAULT_API_URL: &str = "https://ngoctham.com/ajax/proxy_banggia.php";

/// Header of the column that names the price category.
pub const DEFAULT_CATEGORY_COLUMN: &str = "gold_type";

/// Names of the fixed columns; none of them can double as the category column.
pub const RESERVED_COLUMNS: [&str; 3] = ["date", "buy_price", "sell_price"];

/// Environment variable naming a JSON settings file.
pub const CONFIG_ENV: &str = "GOLD_PRICE_CONFIG";
/// Environment variable overriding `data_path`.
pub const CSV_PATH_ENV: &str = "GOLD_PRICE_CSV";
/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "GOLD_PRICE_API_URL";

/// Display locale for prices and dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Vietnamese: `1.234.567`, `18/10/2026`
    #[default]
    #[serde(rename = "vi-VN")]
    ViVn,
    /// US English: `1,234,567`, `10/18/2026`
    #[serde(rename = "en-US")]
    EnUs,
    /// German: `1.234.567`, `18.10.2026`
    #[serde(rename = "de-DE")]
    DeDe,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::ViVn => write!(f, "vi-VN"),
            Locale::EnUs => write!(f, "en-US"),
            Locale::DeDe => write!(f, "de-DE"),
        }
    }
}

/// Viewer and collector settings.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Path of the CSV file on disk
    pub data_path: String,

    /// URL of the CSV file when served over HTTP
    pub data_url: Option<String>,

    /// Header name of the category column
    pub category_column: String,

    /// Display locale
    pub locale: Locale,

    /// Upstream price board endpoint (collector only)
    pub api_url: String,

    /// Gold types the collector keeps from the price board
    pub tracked_gold_types: Vec<String>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            data_url: None,
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
            locale: Locale::default(),
            api_url: DEFAULT_API_URL.to_string(),
            tracked_gold_types: vec![
                "Nhẫn 999.9".to_string(),
                "Vàng Miếng SJC (Loại 10 chỉ)".to_string(),
            ],
        }
    }
}

impl ViewerSettings {
    /// Parse settings from JSON, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings from a variable lookup such as `std::env::var`.
    ///
    /// `GOLD_PRICE_CONFIG` names a JSON file to start from (defaults
    /// otherwise); `GOLD_PRICE_CSV` and `GOLD_PRICE_API_URL` then override
    /// single fields.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut settings = match lookup(CONFIG_ENV) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| CoreError::Config(format!("{path}: {e}")))?;
                Self::from_json(&text)?
            }
            None => Self::default(),
        };
        settings.apply_overrides(lookup);
        Ok(settings)
    }

    /// Apply the `GOLD_PRICE_CSV` and `GOLD_PRICE_API_URL` overrides.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(CSV_PATH_ENV) {
            self.data_path = path;
        }
        if let Some(url) = lookup(API_URL_ENV) {
            self.api_url = url;
        }
    }

    /// Reject a category column the parser could never read.
    pub fn validate(&self) -> Result<(), CoreError> {
        let column = self.category_column.trim();
        if column.is_empty() {
            return Err(CoreError::Config(
                "category_column must not be empty".to_string(),
            ));
        }
        if RESERVED_COLUMNS.contains(&column) {
            return Err(CoreError::Config(format!(
                "category_column '{column}' clashes with a fixed column"
            )));
        }
        Ok(())
    }
}
