//! Loading for raw records, pre-built summaries and hypotheses.
//!
//! Raw records come as CSV or as a JSON array, chosen by file extension.

use std::io::{self, ErrorKind};
use std::path::Path;

use adsight_types::{Hypothesis, Summary};
use tracing::{error, info, warn};

use crate::error::IngestionError;
use crate::record::AdRecord;

/// Attempts per file read before giving up.
pub const MAX_READ_ATTEMPTS: u32 = 3;

/// Columns every record source must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "spend", "impressions", "clicks", "revenue"];

/// Columns read when present.
const OPTIONAL_COLUMNS: [&str; 1] = ["campaign_name"];

/// On-disk encoding of raw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    /// `.csv` files are CSV, anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

fn read_with_retry(path: &Path) -> Result<String, IngestionError> {
    retry_read(path, || std::fs::read_to_string(path))
}

/// Run `read` until it succeeds, up to [`MAX_READ_ATTEMPTS`] times. A
/// missing file is not retried.
fn retry_read<F>(path: &Path, mut read: F) -> Result<String, IngestionError>
where
    F: FnMut() -> io::Result<String>,
{
    let mut last_error = None;
    for attempt in 1..=MAX_READ_ATTEMPTS {
        info!(
            path = %path.display(),
            attempt,
            max_attempts = MAX_READ_ATTEMPTS,
            "reading input"
        );
        match read() {
            Ok(raw) => return Ok(raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(path = %path.display(), "data file not found");
                return Err(IngestionError::NotFound(path.to_path_buf()));
            }
            Err(e) => {
                warn!(path = %path.display(), attempt, error = %e, "read failed");
                last_error = Some(e);
            }
        }
    }
    let source = last_error.unwrap_or_else(|| io::Error::other("no read attempted"));
    error!(path = %path.display(), attempts = MAX_READ_ATTEMPTS, "giving up on input");
    Err(IngestionError::Io {
        path: path.to_path_buf(),
        attempts: MAX_READ_ATTEMPTS,
        source,
    })
}

/// Check a header row against [`REQUIRED_COLUMNS`]. Unknown columns are
/// logged and ignored.
pub fn validate_columns<'a>(
    columns: impl IntoIterator<Item = &'a str>,
) -> Result<(), IngestionError> {
    let columns: Vec<&str> = columns.into_iter().map(str::trim).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !columns.contains(c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        error!(?missing, "schema validation failed");
        return Err(IngestionError::MissingColumns(missing));
    }

    let extra: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|c| !REQUIRED_COLUMNS.contains(c) && !OPTIONAL_COLUMNS.contains(c))
        .collect();
    if !extra.is_empty() {
        warn!(?extra, "extra columns present in dataset");
    }
    Ok(())
}

/// Parse CSV with a header row into [`AdRecord`]s. A file with no data rows
/// is an error.
pub fn parse_csv_records(raw: &str) -> Result<Vec<AdRecord>, IngestionError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    validate_columns(reader.headers()?.iter())?;

    let records = reader
        .deserialize::<AdRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(IngestionError::EmptyDataset);
    }
    Ok(records)
}

/// Parse a JSON array of [`AdRecord`]s. An empty array is an error.
pub fn parse_records(raw: &str) -> Result<Vec<AdRecord>, IngestionError> {
    let records: Vec<AdRecord> = serde_json::from_str(raw)?;
    if records.is_empty() {
        return Err(IngestionError::EmptyDataset);
    }
    Ok(records)
}

/// Load raw ad rows from a CSV or JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<AdRecord>, IngestionError> {
    let path = path.as_ref();
    let format = RecordFormat::from_path(path);
    let raw = read_with_retry(path)?;
    let records = match format {
        RecordFormat::Csv => parse_csv_records(&raw)?,
        RecordFormat::Json => parse_records(&raw)?,
    };
    info!(path = %path.display(), ?format, rows = records.len(), "records loaded");
    Ok(records)
}

/// Load a pre-built [`Summary`]. A missing top-level field is a parse error.
pub fn load_summary(path: impl AsRef<Path>) -> Result<Summary, IngestionError> {
    let raw = read_with_retry(path.as_ref())?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load caller-supplied hypotheses from a JSON array file.
pub fn load_hypotheses(path: impl AsRef<Path>) -> Result<Vec<Hypothesis>, IngestionError> {
    let path = path.as_ref();
    let hypotheses: Vec<Hypothesis> = serde_json::from_str(&read_with_retry(path)?)?;
    info!(path = %path.display(), count = hypotheses.len(), "hypotheses loaded");
    Ok(hypotheses)
}
