// engine/src/services/dashboard_service/mod.rs
// DashboardService owns one cleaned dataset and answers per-request calls.
// Each call takes an immutable FilterSelection; the service keeps no
// per-user state between calls.

use crate::config::PipelineSettings;
use crate::data::{Dataset, FilterOptions, FilterSelection};
use crate::error::Result;
use shared::models::{RawTable, Record};

pub mod filter_options;
pub mod load_table;
pub mod overview;

pub use overview::DashboardView;

pub struct DashboardService {
    dataset: Dataset,
    settings: PipelineSettings,
}

impl DashboardService {
    /// Wraps an already cleaned dataset. Settings are validated here too, so
    /// every service handed out can serve an overview.
    pub fn new(dataset: Dataset, settings: PipelineSettings) -> Result<Self> {
        settings.validate()?;
        Ok(DashboardService { dataset, settings })
    }

    /// Builds the dataset from a raw table; fails when mandatory columns are
    /// missing or no row survives cleaning.
    pub fn load(table: &RawTable, settings: PipelineSettings) -> Result<Self> {
        tracing::info!(columns = table.columns.len(), rows = table.len(), "Received table, dispatching to loader.");
        settings.validate()?;
        let dataset = load_table::handle_load_table(table, &settings)?;
        Ok(DashboardService { dataset, settings })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// User-visible warnings produced while mapping the table.
    pub fn warnings(&self) -> &[String] {
        &self.dataset.schema().warnings
    }

    pub fn filter_options(&self) -> FilterOptions {
        filter_options::handle_filter_options(&self.dataset)
    }

    pub fn cities_for_regions(&self, regions: &[String]) -> Vec<String> {
        filter_options::handle_cities_for_regions(&self.dataset, regions)
    }

    pub fn filtered(&self, filter: &FilterSelection) -> Vec<&Record> {
        tracing::debug!(?filter, "Applying filter selection");
        let selected = filter.apply(self.dataset.records());
        if selected.is_empty() {
            tracing::warn!(?filter, "No records match the filter selection");
        }
        selected
    }

    pub fn overview(&self, filter: &FilterSelection) -> DashboardView {
        tracing::info!(?filter, "Received overview request, dispatching to handler.");
        overview::handle_overview(self, filter)
    }
}
