use shared::models::Role;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration parsing error: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // Fatal to the load: the table cannot be used without this column.
    #[error("No {role} column found in the table (columns: {columns:?})")]
    MissingMandatoryColumn { role: Role, columns: Vec<String> },

    #[error("No valid records left after cleaning {total_rows} rows")]
    NoValidRecords { total_rows: usize },

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// Whether the error means the dataset itself is unusable, as opposed to
    /// a problem with the engine's own configuration or environment.
    pub fn is_invalid_dataset(&self) -> bool {
        matches!(
            self,
            EngineError::MissingMandatoryColumn { .. } | EngineError::NoValidRecords { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
