use chrono::{FixedOffset, NaiveDate, Utc};
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::quote::Quote;

const SOURCE_NAME: &str = "Ngoc Tham";
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const BOARD_REFERER: &str = "https://ngoctham.com/bang-gia-vang/";

/// Vietnam is UTC+7 all year round.
const VN_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Client for the Ngoc Tham jewellery price board.
///
/// - **Free**: No API key. The endpoint only answers requests that look
///   like they come from the public price page, hence the headers.
/// - **Payload**: `{ "chitiet": [ { "loaivang", "giamua", "giaban" } ] }`
///   where prices are strings with `.` thousands separators.
pub struct NgocThamClient {
    client: Client,
    url: String,
}

impl NgocThamClient {
    pub fn new(url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(BOARD_REFERER));

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }

    /// Fetch the raw board payload.
    pub async fn fetch_board(&self) -> Result<Value, CoreError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| CoreError::Api {
            source_name: SOURCE_NAME.into(),
            message: format!("Failed to parse price board: {e}"),
        })
    }
}

/// The list of quote items in a board payload.
///
/// Items normally live under `chitiet`; a bare top-level array is accepted
/// too. Anything else yields no items.
fn board_items(board: &Value) -> &[Value] {
    if let Some(items) = board.get("chitiet").and_then(Value::as_array) {
        return items;
    }
    board.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Parse a board price such as `"81.500.000"` or `"81,500,000"`.
///
/// Separators are stripped before parsing. Missing, empty, or otherwise
/// unparseable values become 0.
pub fn parse_board_price(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => {
            let digits: String = s.chars().filter(|c| *c != '.' && *c != ',').collect();
            digits.trim().parse().unwrap_or(0)
        }
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Extract the quotes for the tracked gold types from a board payload.
///
/// Board order is preserved. Untracked types are ignored.
pub fn parse_quotes(board: &Value, tracked: &[String]) -> Vec<Quote> {
    board_items(board)
        .iter()
        .filter_map(|item| {
            let name = item.get("loaivang").and_then(Value::as_str)?.trim();
            if !tracked.iter().any(|t| t == name) {
                return None;
            }
            Some(Quote {
                gold_type: name.to_string(),
                buy_price: parse_board_price(item.get("giamua")),
                sell_price: parse_board_price(item.get("giaban")),
            })
        })
        .collect()
}

/// Every gold type name listed on the board, for diagnostics.
pub fn available_types(board: &Value) -> Vec<String> {
    board_items(board)
        .iter()
        .filter_map(|item| item.get("loaivang").and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .collect()
}

/// Today's date on the Vietnam wall clock.
pub fn today_in_vietnam() -> NaiveDate {
    match FixedOffset::east_opt(VN_UTC_OFFSET_SECS) {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Utc::now().date_naive(),
    }
}
