//! Shared fixtures for the adsight end-to-end and property tests.

use adsight_ingestion::{AdRecord, SummaryBuilder};
use adsight_types::Summary;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_LOW_CTR: f64 = 0.01;

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// One record per day for a single campaign, from [`start_date`].
///
/// `roas[i]` sets day `i`'s revenue against a fixed spend of 100.
pub fn daily_records(campaign: &str, roas: &[f64]) -> Vec<AdRecord> {
    roas.iter()
        .enumerate()
        .map(|(i, r)| {
            AdRecord::new(
                start_date() + Duration::days(i as i64),
                campaign,
                100.0,
                1000.0,
                20.0,
                100.0 * r,
            )
        })
        .collect()
}

/// Seven days at `before` followed by seven at `after`.
pub fn roas_step(before: f64, after: f64) -> Vec<f64> {
    let mut roas = vec![before; 7];
    roas.extend(std::iter::repeat(after).take(7));
    roas
}

/// A single-day record for a named campaign.
pub fn campaign_record(campaign: &str, impressions: f64, clicks: f64) -> AdRecord {
    AdRecord::new(start_date(), campaign, 50.0, impressions, clicks, 100.0)
}

/// Summarize at the default low-CTR threshold.
pub fn summarize(records: &[AdRecord]) -> Summary {
    SummaryBuilder::new(DEFAULT_LOW_CTR)
        .build(records)
        .unwrap_or_else(|e| panic!("fixture records must summarize: {e}"))
}
