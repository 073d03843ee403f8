// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("no sales data for year {0} (supported: 2022, 2023, 2024)")]
    UnknownYear(u16),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the selection contains no records")]
    NoRecords,

    #[error("report region '{0}' does not exist")]
    MissingRegion(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
