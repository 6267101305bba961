// Handler for loading a raw table into a cleaned dataset
use crate::config::PipelineSettings;
use crate::data::Dataset;
use crate::error::Result;
use shared::models::RawTable;

pub fn handle_load_table(table: &RawTable, settings: &PipelineSettings) -> Result<Dataset> {
    tracing::debug!(columns = ?table.columns, "Handling table load in dedicated handler");

    match Dataset::from_table(table, settings) {
        Ok(dataset) => {
            for warning in &dataset.schema().warnings {
                tracing::warn!(%warning, "Table loaded with warning");
            }
            tracing::info!(
                records = dataset.records().len(),
                dropped = dataset.dropped_rows(),
                "Successfully loaded dataset"
            );
            Ok(dataset)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error loading table");
            Err(e)
        }
    }
}
