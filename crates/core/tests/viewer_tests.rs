// ═══════════════════════════════════════════════════════════════════
// Viewer Tests — LoadService, data sources, GoldPriceViewer facade
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::io::Write;

use gold_price_core::errors::CoreError;
use gold_price_core::models::price::PriceRecord;
use gold_price_core::models::settings::{Locale, ViewerSettings};
use gold_price_core::models::table::TableProjection;
use gold_price_core::providers::file::FileSource;
use gold_price_core::providers::http::HttpSource;
use gold_price_core::providers::traits::DataSource;
use gold_price_core::services::format_service::TableView;
use gold_price_core::services::load_service::LoadService;
use gold_price_core::GoldPriceViewer;

const SAMPLE_CSV: &str = "date,gold_type,buy_price,sell_price\n\
                          2024-01-01,A,100,105\n\
                          2024-01-02,A,110,115\n";

// ═══════════════════════════════════════════════════════════════════
// Mock Sources
// ═══════════════════════════════════════════════════════════════════

struct StaticSource {
    text: String,
}

impl StaticSource {
    fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "static".into()
    }

    async fn fetch_text(&self) -> Result<String, CoreError> {
        Ok(self.text.clone())
    }
}

struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    fn describe(&self) -> String {
        "failing".into()
    }

    async fn fetch_text(&self) -> Result<String, CoreError> {
        Err(CoreError::HttpStatus {
            url: "data/gold_prices.csv".into(),
            status: 404,
        })
    }
}

fn settings_en() -> ViewerSettings {
    ViewerSettings {
        locale: Locale::EnUs,
        ..ViewerSettings::default()
    }
}

// ═══════════════════════════════════════════════════════════════════
// LoadService
// ═══════════════════════════════════════════════════════════════════

mod load_service {
    use super::*;

    #[tokio::test]
    async fn loads_and_parses() {
        let records = LoadService::default().load(&StaticSource::new(SAMPLE_CSV)).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PriceRecord::new("2024-01-01", "A", 100, 105));
    }

    #[tokio::test]
    async fn failure_yields_empty_dataset() {
        let records = LoadService::default().load(&FailingSource).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn empty_body_yields_empty_dataset() {
        let records = LoadService::default().load(&StaticSource::new("")).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn missing_file_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.csv"));
        let records = LoadService::default().load(&source).await;
        assert!(records.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Data sources
// ═══════════════════════════════════════════════════════════════════

mod sources {
    use super::*;

    #[tokio::test]
    async fn file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.fetch_text().await.unwrap(), SAMPLE_CSV);
        assert!(source.describe().starts_with("file "));
    }

    #[tokio::test]
    async fn file_source_missing_is_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("missing.csv"))
            .fetch_text()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn http_source_describes_url() {
        let source = HttpSource::new("https://example.com/data/gold_prices.csv");
        assert_eq!(source.url(), "https://example.com/data/gold_prices.csv");
        assert_eq!(source.describe(), "HTTP https://example.com/data/gold_prices.csv");
    }
}

// ═══════════════════════════════════════════════════════════════════
// GoldPriceViewer
// ═══════════════════════════════════════════════════════════════════

mod viewer {
    use super::*;

    #[test]
    fn new_viewer_is_not_loaded() {
        let viewer = GoldPriceViewer::new(ViewerSettings::default());
        assert!(!viewer.is_loaded());
        assert!(viewer.is_empty());
        assert_eq!(viewer.latest_date(), None);
        assert_eq!(viewer.selected_date(), None);
    }

    #[tokio::test]
    async fn load_selects_latest_date_and_first_category() {
        let mut viewer = GoldPriceViewer::new(ViewerSettings::default());
        let count = viewer.load(&StaticSource::new(SAMPLE_CSV)).await;
        assert_eq!(count, 2);
        assert!(viewer.is_loaded());
        assert_eq!(viewer.selected_date(), Some("2024-01-02"));
        assert_eq!(viewer.selected_category(), Some("A"));
        assert_eq!(viewer.chart_series().len(), 2);
    }

    #[tokio::test]
    async fn failed_load_is_loaded_but_empty() {
        let mut viewer = GoldPriceViewer::new(settings_en());
        assert_eq!(viewer.load(&FailingSource).await, 0);
        assert!(viewer.is_loaded());
        assert!(viewer.is_empty());
        assert_eq!(viewer.selected_category(), None);
        assert!(viewer.chart_series().is_empty());
        assert_eq!(
            viewer.render_table_at("2024-01-01"),
            TableView::Message { text: "No gold price data available".into() }
        );
    }

    #[tokio::test]
    async fn reload_replaces_dataset() {
        let mut viewer = GoldPriceViewer::new(ViewerSettings::default());
        viewer.load(&StaticSource::new(SAMPLE_CSV)).await;
        viewer.load(&FailingSource).await;
        assert!(viewer.records().is_empty());
        assert!(viewer.dates().is_empty());
    }

    #[tokio::test]
    async fn load_configured_reads_data_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let settings = ViewerSettings {
            data_path: file.path().to_string_lossy().into_owned(),
            ..ViewerSettings::default()
        };
        let mut viewer = GoldPriceViewer::new(settings);
        assert_eq!(viewer.load_configured().await, 2);
    }

    #[test]
    fn end_to_end_table() {
        let viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        assert_eq!(viewer.records().len(), 2);

        let newest = viewer.table_at("2024-01-02");
        let row = &newest.rows()[0];
        assert_eq!(row.category, "A");
        assert_eq!((row.buy_price, row.buy_delta), (110, 10));
        assert_eq!((row.sell_price, row.sell_delta), (115, 10));

        let oldest = viewer.table_at("2024-01-01");
        let row = &oldest.rows()[0];
        assert_eq!((row.buy_price, row.buy_delta), (100, 0));
        assert_eq!((row.sell_price, row.sell_delta), (105, 0));
    }

    #[test]
    fn end_to_end_rendering() {
        let viewer = GoldPriceViewer::from_csv(settings_en(), SAMPLE_CSV);
        match viewer.render_table_at("2024-01-02") {
            TableView::Rows { date_label, rows } => {
                assert_eq!(date_label, "1/2/2024");
                assert_eq!(rows[0].buy_delta.text, "+10");
            }
            other => panic!("expected rows, got {other:?}"),
        }
        match viewer.render_table_at("2024-01-01") {
            TableView::Rows { rows, .. } => assert!(rows[0].buy_delta.is_unchanged()),
            other => panic!("expected rows, got {other:?}"),
        }
        assert_eq!(
            viewer.render_table_at("2024-02-01"),
            TableView::Message { text: "No data for 2/1/2024".into() }
        );
    }

    #[test]
    fn queries() {
        let viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        assert_eq!(viewer.dates(), &["2024-01-02", "2024-01-01"]);
        assert_eq!(viewer.latest_date(), Some("2024-01-02"));
        assert_eq!(viewer.previous_date("2024-01-02"), Some("2024-01-01"));
        assert_eq!(viewer.previous_date("2024-01-01"), None);
        assert_eq!(viewer.categories(), vec!["A"]);
        assert_eq!(viewer.date_index().len(), 2);
    }

    #[test]
    fn select_date_records_selection() {
        let mut viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        let table = viewer.select_date("2024-01-01");
        assert_eq!(table.date(), "2024-01-01");
        assert_eq!(viewer.selected_date(), Some("2024-01-01"));
        assert_eq!(viewer.selected_table(), Some(table));
    }

    #[test]
    fn select_unknown_date_is_no_data() {
        let mut viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        let table = viewer.select_date("1999-12-31");
        assert_eq!(table, TableProjection::NoData { date: "1999-12-31".into() });
    }

    #[test]
    fn select_category_updates_chart_in_place() {
        let text = "date,gold_type,buy_price,sell_price\n\
                    2024-01-01,A,1,2\n\
                    2024-01-01,B,3,4\n\
                    2024-01-02,B,5,6\n";
        let mut viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), text);
        assert_eq!(viewer.chart_series().category, "A");

        let series = viewer.select_category("B");
        assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.buy, vec![3, 5]);
        assert_eq!(viewer.chart_series().category, "B");
        assert_eq!(viewer.selected_category(), Some("B"));
        assert_eq!(viewer.series_for("B"), *viewer.chart_series());
    }

    #[test]
    fn from_records_sorts_by_date() {
        let records = vec![
            PriceRecord::new("2024-01-02", "A", 2, 2),
            PriceRecord::new("2024-01-01", "A", 1, 1),
        ];
        let viewer = GoldPriceViewer::from_records(ViewerSettings::default(), records);
        assert_eq!(viewer.records()[0].date, "2024-01-01");
        assert_eq!(viewer.series_for("A").buy, vec![1, 2]);
    }

    #[test]
    fn custom_category_column_flows_through() {
        let settings = ViewerSettings {
            category_column: "product".into(),
            ..ViewerSettings::default()
        };
        let text = "date,product,buy_price,sell_price\n2024-01-01,Ring,1,2\n";
        let viewer = GoldPriceViewer::from_csv(settings, text);
        assert_eq!(viewer.categories(), vec!["Ring"]);
    }

    #[test]
    fn set_locale_changes_rendering_only() {
        let mut viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        let before = viewer.table_at("2024-01-02");
        viewer.set_locale(Locale::EnUs);
        assert_eq!(viewer.settings().locale, Locale::EnUs);
        assert_eq!(viewer.formatter().locale(), Locale::EnUs);
        assert_eq!(viewer.table_at("2024-01-02"), before);
    }

    #[test]
    fn debug_output_is_compact() {
        let viewer = GoldPriceViewer::from_csv(ViewerSettings::default(), SAMPLE_CSV);
        let debug = format!("{viewer:?}");
        assert!(debug.contains("GoldPriceViewer"));
        assert!(debug.contains("records: 2"));
    }
}
