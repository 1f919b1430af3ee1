use std::process::ExitCode;

use gold_price_core::errors::CoreError;
use gold_price_core::models::settings::{Locale, ViewerSettings};
use gold_price_core::providers::ngoc_tham::{
    available_types, parse_quotes, today_in_vietnam, NgocThamClient,
};
use gold_price_core::services::format_service::{LocaleFormatter, PriceFormatter};
use gold_price_core::storage::csv_store::CsvStore;
use tracing::{error, info, warn};

async fn run() -> Result<(), CoreError> {
    let settings = ViewerSettings::from_lookup(|key| std::env::var(key).ok())?;
    let today = today_in_vietnam();
    info!(date = %today, "fetching gold prices");

    let client = NgocThamClient::new(settings.api_url.clone());
    let board = client.fetch_board().await?;
    let quotes = parse_quotes(&board, &settings.tracked_gold_types);

    if quotes.is_empty() {
        warn!(
            available = ?available_types(&board),
            "no tracked gold types found on the price board"
        );
        return Ok(());
    }

    let store =
        CsvStore::new(&settings.data_path).with_category_column(settings.category_column.clone());
    let written = store.append_quotes(&quotes, today)?;
    if written.is_empty() {
        info!(date = %today, "prices already recorded for today, nothing to save");
        return Ok(());
    }

    let fmt = LocaleFormatter::new(Locale::EnUs);
    for quote in &written {
        info!(
            "[{today}] {} - Buy: {} / Sell: {}",
            quote.gold_type,
            fmt.format_price(i64::try_from(quote.buy_price).unwrap_or(i64::MAX)),
            fmt.format_price(i64::try_from(quote.sell_price).unwrap_or(i64::MAX)),
        );
    }
    info!(rows = written.len(), path = %store.path().display(), "prices saved");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "collector run failed");
            ExitCode::FAILURE
        }
    }
}
