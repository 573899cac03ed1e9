//! Summary construction from raw ad rows.

use std::collections::BTreeMap;

use adsight_types::{
    AnalysisConfig, CampaignMetrics, DailyMetrics, MetricAggregate, Summary, WindowMetrics,
    WINDOW_DAYS,
};
use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use crate::error::IngestionError;
use crate::record::AdRecord;

/// Running raw totals for one group.
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    spend: f64,
    impressions: f64,
    clicks: f64,
    revenue: f64,
}

impl Accumulator {
    fn add(&mut self, r: &AdRecord) {
        self.spend += r.spend;
        self.impressions += r.impressions;
        self.clicks += r.clicks;
        self.revenue += r.revenue;
    }

    fn finish(&self) -> MetricAggregate {
        MetricAggregate::from_totals(self.spend, self.impressions, self.clicks, self.revenue)
    }
}

/// Builds a [`Summary`] from raw per-day, per-campaign rows.
pub struct SummaryBuilder {
    low_ctr_threshold: f64,
}

impl SummaryBuilder {
    pub fn new(low_ctr_threshold: f64) -> Self {
        Self { low_ctr_threshold }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.low_ctr_threshold)
    }

    /// Aggregate `records` into totals, a daily series, per-campaign metrics,
    /// the trailing 7-day window and the low-CTR campaign list.
    pub fn build(&self, records: &[AdRecord]) -> Result<Summary, IngestionError> {
        if records.is_empty() {
            return Err(IngestionError::EmptyDataset);
        }

        let mut totals = Accumulator::default();
        let mut by_day: BTreeMap<NaiveDate, Accumulator> = BTreeMap::new();
        let mut by_campaign: BTreeMap<String, Accumulator> = BTreeMap::new();
        let mut replaced = 0usize;

        for raw in records {
            let mut record = raw.clone();
            replaced += record.sanitize();
            totals.add(&record);
            by_day.entry(record.date).or_default().add(&record);
            by_campaign
                .entry(record.campaign_name.clone())
                .or_default()
                .add(&record);
        }

        if replaced > 0 {
            warn!(replaced, "non-finite values replaced with 0");
        }

        let daily: Vec<DailyMetrics> = by_day
            .iter()
            .map(|(date, acc)| DailyMetrics {
                date: *date,
                metrics: acc.finish(),
            })
            .collect();

        let campaign: BTreeMap<String, CampaignMetrics> = by_campaign
            .into_iter()
            .map(|(name, acc)| {
                let metrics = CampaignMetrics {
                    campaign_name: name.clone(),
                    metrics: acc.finish(),
                };
                (name, metrics)
            })
            .collect();

        let low_ctr_campaigns: Vec<CampaignMetrics> = campaign
            .values()
            .filter(|c| c.metrics.ctr < self.low_ctr_threshold)
            .cloned()
            .collect();

        let summary = Summary {
            totals: totals.finish(),
            recent_window: recent_window(&daily),
            daily,
            campaign,
            low_ctr_campaigns,
        };

        info!(
            rows = records.len(),
            days = summary.daily.len(),
            campaigns = summary.campaign.len(),
            low_ctr = summary.low_ctr_campaigns.len(),
            spend = summary.totals.spend,
            revenue = summary.totals.revenue,
            ctr = summary.totals.ctr,
            roas = summary.totals.roas,
            "summary created"
        );

        Ok(summary)
    }
}

/// Aggregate over the last [`WINDOW_DAYS`] calendar days (inclusive) ending
/// at the latest date present.
fn recent_window(daily: &[DailyMetrics]) -> Option<WindowMetrics> {
    let end = daily.last()?.date;
    let start = end
        .checked_sub_days(Days::new(WINDOW_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);
    let metrics = MetricAggregate::combine(
        daily
            .iter()
            .filter(|d| d.date >= start)
            .map(|d| &d.metrics),
    );
    Some(WindowMetrics {
        start,
        end,
        metrics,
    })
}
