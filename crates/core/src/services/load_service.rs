use tracing::{error, info};

use crate::models::price::PriceRecord;
use crate::providers::traits::DataSource;
use super::parser_service::ParserService;

/// Fetches and parses the price file.
///
/// Loading never fails from the caller's point of view: a source error is
/// logged and treated exactly like a file with no data.
pub struct LoadService {
    parser: ParserService,
}

impl LoadService {
    pub fn new(parser: ParserService) -> Self {
        Self { parser }
    }

    /// Fetch from `source` and parse. Errors yield an empty vector.
    pub async fn load(&self, source: &dyn DataSource) -> Vec<PriceRecord> {
        let text = match source.fetch_text().await {
            Ok(text) => text,
            Err(e) => {
                error!(source = %source.describe(), error = %e, "failed to load gold price data");
                return Vec::new();
            }
        };

        let records = self.parser.parse(&text);
        info!(source = %source.describe(), records = records.len(), "gold price data loaded");
        records
    }
}

impl Default for LoadService {
    fn default() -> Self {
        Self::new(ParserService::new())
    }
}
