pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    chart::SeriesProjection,
    price::PriceRecord,
    settings::{Locale, ViewerSettings},
    table::TableProjection,
};
use providers::traits::DataSource;
use services::{
    chart_service::ChartService,
    date_index::DateIndex,
    format_service::{render_table, LocaleFormatter, PriceFormatter, TableView},
    load_service::LoadService,
    parser_service::ParserService,
    table_service::TableService,
};

/// Main entry point for the gold price viewer core.
///
/// Holds the loaded dataset, its date index, and the current selections.
/// The dataset is replaced as a whole on each load and never mutated in
/// between; every projection is recomputed from it on demand.
#[must_use]
pub struct GoldPriceViewer {
    settings: ViewerSettings,
    records: Vec<PriceRecord>,
    index: DateIndex,
    /// `false` until the first load attempt has finished.
    loaded: bool,
    selected_date: Option<String>,
    selected_category: Option<String>,
    /// Chart data for the selected category, refilled in place.
    series: SeriesProjection,
    load_service: LoadService,
    table_service: TableService,
    chart_service: ChartService,
    formatter: LocaleFormatter,
}

impl std::fmt::Debug for GoldPriceViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoldPriceViewer")
            .field("records", &self.records.len())
            .field("dates", &self.index.len())
            .field("loaded", &self.loaded)
            .field("selected_date", &self.selected_date)
            .field("selected_category", &self.selected_category)
            .field("locale", &self.formatter.locale())
            .finish()
    }
}

impl GoldPriceViewer {
    /// Create a viewer with no data loaded yet.
    pub fn new(settings: ViewerSettings) -> Self {
        let parser = ParserService::new().with_category_column(settings.category_column.clone());
        let formatter = LocaleFormatter::new(settings.locale);
        Self {
            settings,
            records: Vec::new(),
            index: DateIndex::default(),
            loaded: false,
            selected_date: None,
            selected_category: None,
            series: SeriesProjection::default(),
            load_service: LoadService::new(parser),
            table_service: TableService::new(),
            chart_service: ChartService::new(),
            formatter,
        }
    }

    /// Create a viewer over records that are already in memory.
    /// Records are put in date order (stable) before use.
    pub fn from_records(settings: ViewerSettings, mut records: Vec<PriceRecord>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date));
        let mut viewer = Self::new(settings);
        viewer.replace_dataset(records);
        viewer
    }

    /// Create a viewer by parsing CSV text directly.
    pub fn from_csv(settings: ViewerSettings, text: &str) -> Self {
        let records = ParserService::new()
            .with_category_column(settings.category_column.clone())
            .parse(text);
        let mut viewer = Self::new(settings);
        viewer.replace_dataset(records);
        viewer
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Load the dataset from `source`, replacing whatever was loaded.
    /// A failing source is logged and leaves an empty dataset.
    /// Returns the number of records loaded.
    pub async fn load(&mut self, source: &dyn DataSource) -> usize {
        let records = self.load_service.load(source).await;
        self.replace_dataset(records);
        self.records.len()
    }

    /// Load from the configured location: `data_url` when set, otherwise
    /// `data_path` on disk.
    pub async fn load_configured(&mut self) -> usize {
        if let Some(url) = self.settings.data_url.clone() {
            let source = providers::http::HttpSource::new(url);
            return self.load(&source).await;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let source = providers::file::FileSource::new(self.settings.data_path.clone());
            self.load(&source).await
        }
        #[cfg(target_arch = "wasm32")]
        {
            let source = providers::http::HttpSource::new(self.settings.data_path.clone());
            self.load(&source).await
        }
    }

    /// `true` once a load attempt has completed, even if it found nothing.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// `true` when the loaded dataset has no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Dataset queries ─────────────────────────────────────────────

    /// All records, ascending by date.
    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// Distinct dates, newest first.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        self.index.dates()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.chart_service.categories(&self.records)
    }

    /// The newest observed date.
    #[must_use]
    pub fn latest_date(&self) -> Option<&str> {
        self.index.latest()
    }

    /// The observed date immediately before `date`.
    #[must_use]
    pub fn previous_date(&self, date: &str) -> Option<&str> {
        self.index.previous(date)
    }

    #[must_use]
    pub fn date_index(&self) -> &DateIndex {
        &self.index
    }

    // ── Projections ─────────────────────────────────────────────────

    /// Price table for `date` with changes against the previous date.
    #[must_use]
    pub fn table_at(&self, date: &str) -> TableProjection {
        self.table_service.project(&self.records, &self.index, date)
    }

    /// Buy/sell series of `category`, date-ascending.
    #[must_use]
    pub fn series_for(&self, category: &str) -> SeriesProjection {
        self.chart_service.project(&self.records, category)
    }

    /// Formatted table for `date` in the configured locale.
    #[must_use]
    pub fn render_table_at(&self, date: &str) -> TableView {
        if self.records.is_empty() {
            return TableView::Message {
                text: self.formatter.empty_dataset_message(),
            };
        }
        render_table(&self.formatter, &self.table_at(date))
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Select a date and return its table.
    pub fn select_date(&mut self, date: impl Into<String>) -> TableProjection {
        let date = date.into();
        let table = self.table_at(&date);
        self.selected_date = Some(date);
        table
    }

    /// Select a category and update the chart series in place.
    pub fn select_category(&mut self, category: impl Into<String>) -> &SeriesProjection {
        let category = category.into();
        self.chart_service
            .refill(&mut self.series, &self.records, &category);
        self.selected_category = Some(category);
        &self.series
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Table for the selected date, if one is selected.
    #[must_use]
    pub fn selected_table(&self) -> Option<TableProjection> {
        self.selected_date.as_deref().map(|d| self.table_at(d))
    }

    /// Chart data for the selected category.
    #[must_use]
    pub fn chart_series(&self) -> &SeriesProjection {
        &self.series
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[must_use]
    pub fn formatter(&self) -> &LocaleFormatter {
        &self.formatter
    }

    /// Switch the display locale. Projections are unaffected.
    pub fn set_locale(&mut self, locale: Locale) {
        self.settings.locale = locale;
        self.formatter = LocaleFormatter::new(locale);
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Install a new dataset and reset selections to the newest date and
    /// the first category.
    fn replace_dataset(&mut self, records: Vec<PriceRecord>) {
        self.index = DateIndex::build(&records);
        self.records = records;
        self.loaded = true;
        self.selected_date = self.index.latest().map(str::to_string);

        let first_category = self.records.first().map(|r| r.category.clone());
        match first_category {
            Some(category) => {
                self.select_category(category);
            }
            None => {
                self.selected_category = None;
                self.series = SeriesProjection::default();
            }
        }
    }
}
