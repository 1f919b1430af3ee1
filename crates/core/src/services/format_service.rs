use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::price::ISO_DATE_FORMAT;
use crate::models::settings::Locale;
use crate::models::table::TableProjection;

/// Direction marker shown next to a non-zero change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaIndicator {
    Up,
    Down,
}

/// A change value ready for display.
///
/// Zero has no indicator and an empty text. Positive values carry an
/// explicit `+`; negative values keep their own `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDelta {
    pub indicator: Option<DeltaIndicator>,
    pub text: String,
}

impl FormattedDelta {
    pub fn is_unchanged(&self) -> bool {
        self.indicator.is_none()
    }
}

/// Locale-dependent rendering of prices, changes, and dates.
///
/// Projections produce raw numbers; everything a user reads goes through
/// this trait, so tests can pin a locale.
pub trait PriceFormatter {
    /// Group thousands, e.g. `81500000` → `81.500.000` (vi-VN).
    fn format_price(&self, value: i64) -> String;

    /// Render a change with its direction marker.
    fn format_delta(&self, delta: i64) -> FormattedDelta {
        match delta.signum() {
            0 => FormattedDelta {
                indicator: None,
                text: String::new(),
            },
            1 => FormattedDelta {
                indicator: Some(DeltaIndicator::Up),
                text: format!("+{}", self.format_price(delta)),
            },
            _ => FormattedDelta {
                indicator: Some(DeltaIndicator::Down),
                text: self.format_price(delta),
            },
        }
    }

    /// Display form of an ISO date; anything unparseable is shown as-is.
    fn format_date(&self, iso_date: &str) -> String;

    /// Message for a date that has no records.
    fn no_data_message(&self, iso_date: &str) -> String;

    /// Message for a dataset with no records at all.
    fn empty_dataset_message(&self) -> String;
}

/// `PriceFormatter` for the built-in locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleFormatter {
    locale: Locale,
}

impl LocaleFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn group_separator(&self) -> char {
        match self.locale {
            Locale::ViVn | Locale::DeDe => '.',
            Locale::EnUs => ',',
        }
    }

    fn date_pattern(&self) -> &'static str {
        match self.locale {
            Locale::ViVn => "%d/%m/%Y",
            Locale::EnUs => "%-m/%-d/%Y",
            Locale::DeDe => "%d.%m.%Y",
        }
    }
}

impl PriceFormatter for LocaleFormatter {
    fn format_price(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let sep = self.group_separator();

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
        out
    }

    fn format_date(&self, iso_date: &str) -> String {
        match NaiveDate::parse_from_str(iso_date, ISO_DATE_FORMAT) {
            Ok(date) => date.format(self.date_pattern()).to_string(),
            Err(_) => iso_date.to_string(),
        }
    }

    fn no_data_message(&self, iso_date: &str) -> String {
        let shown = self.format_date(iso_date);
        match self.locale {
            Locale::ViVn => format!("Không có dữ liệu cho ngày {shown}"),
            Locale::EnUs => format!("No data for {shown}"),
            Locale::DeDe => format!("Keine Daten für {shown}"),
        }
    }

    fn empty_dataset_message(&self) -> String {
        match self.locale {
            Locale::ViVn => "Chưa có dữ liệu giá vàng".to_string(),
            Locale::EnUs => "No gold price data available".to_string(),
            Locale::DeDe => "Keine Goldpreisdaten vorhanden".to_string(),
        }
    }
}

/// One table row with every value already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub category: String,
    pub buy_price: String,
    pub buy_delta: FormattedDelta,
    pub sell_price: String,
    pub sell_delta: FormattedDelta,
}

/// What the table area should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableView {
    Rows { date_label: String, rows: Vec<DisplayRow> },
    Message { text: String },
}

/// Format a table projection for display.
pub fn render_table(formatter: &dyn PriceFormatter, projection: &TableProjection) -> TableView {
    match projection {
        TableProjection::NoData { date } => TableView::Message {
            text: formatter.no_data_message(date),
        },
        TableProjection::Rows { date, rows } => TableView::Rows {
            date_label: formatter.format_date(date),
            rows: rows
                .iter()
                .map(|row| DisplayRow {
                    category: row.category.clone(),
                    buy_price: formatter.format_price(saturating_i64(row.buy_price)),
                    buy_delta: formatter.format_delta(row.buy_delta),
                    sell_price: formatter.format_price(saturating_i64(row.sell_price)),
                    sell_delta: formatter.format_delta(row.sell_delta),
                })
                .collect(),
        },
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
