use adsight_ingestion::IngestionError;

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid analysis settings: {0}")]
    Analysis(#[from] adsight_types::ConfigError),
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    #[error("failed to write report: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
