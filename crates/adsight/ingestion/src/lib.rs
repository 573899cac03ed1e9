//! adsight Ingestion - raw ad rows to metric summaries
//!
//! Cleans non-finite numbers, groups rows by day and by campaign, and
//! derives every rate through the zero-safe division in `adsight-types`.

#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod loader;
pub mod record;

pub use builder::SummaryBuilder;
pub use error::IngestionError;
pub use loader::{
    load_hypotheses, load_records, load_summary, parse_csv_records, parse_records,
    validate_columns, RecordFormat, REQUIRED_COLUMNS,
};
pub use record::AdRecord;
