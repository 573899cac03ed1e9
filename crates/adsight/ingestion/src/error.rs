use std::path::PathBuf;

/// Errors from summary ingestion.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("reading {} failed after {attempts} attempts: {source}", path.display())]
    Io {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("malformed input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}
