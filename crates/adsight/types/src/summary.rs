//! Aggregated ad-performance metrics consumed by the insight and evaluation
//! crates.
//!
//! A [`Summary`] is produced once by ingestion and never mutated afterwards.
//! Every rate it carries is derived through [`safe_ratio`], so a zero
//! denominator always reads back as `0.0` instead of NaN or infinity.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Divide, mapping zero/negative/non-finite denominators to `0.0`.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Raw totals plus the rates derived from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAggregate {
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub revenue: f64,
    /// clicks / impressions
    pub ctr: f64,
    /// revenue / spend
    pub roas: f64,
}

impl MetricAggregate {
    /// Build an aggregate from raw totals, deriving `ctr` and `roas`.
    pub fn from_totals(spend: f64, impressions: f64, clicks: f64, revenue: f64) -> Self {
        Self {
            spend,
            impressions,
            clicks,
            revenue,
            ctr: safe_ratio(clicks, impressions),
            roas: safe_ratio(revenue, spend),
        }
    }

    /// Sum raw totals across aggregates and re-derive the rates.
    ///
    /// Rates are never averaged: a combined CTR is total clicks over total
    /// impressions.
    pub fn combine<'a>(parts: impl IntoIterator<Item = &'a MetricAggregate>) -> Self {
        let (spend, impressions, clicks, revenue) = parts.into_iter().fold(
            (0.0, 0.0, 0.0, 0.0),
            |(s, i, c, r), m| (s + m.spend, i + m.impressions, c + m.clicks, r + m.revenue),
        );
        Self::from_totals(spend, impressions, clicks, revenue)
    }

    /// spend / impressions
    pub fn cost_per_impression(&self) -> f64 {
        safe_ratio(self.spend, self.impressions)
    }
}

/// One calendar day of account-wide metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub metrics: MetricAggregate,
}

/// Lifetime metrics for one campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub campaign_name: String,
    #[serde(flatten)]
    pub metrics: MetricAggregate,
}

/// Aggregate over a contiguous date range (inclusive on both ends).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(flatten)]
    pub metrics: MetricAggregate,
}

/// Read-only metrics summary handed to the hypothesis generator and the
/// evaluator.
///
/// All five fields are required on deserialization. `recent_window` may be
/// `null` (empty `daily`), but it may not be absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub totals: MetricAggregate,
    /// Ascending by date, one entry per day present in the source data.
    pub daily: Vec<DailyMetrics>,
    /// Keyed by campaign name.
    pub campaign: BTreeMap<String, CampaignMetrics>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub recent_window: Option<WindowMetrics>,
    /// Campaigns whose CTR is below the configured threshold, in `campaign`
    /// order.
    pub low_ctr_campaigns: Vec<CampaignMetrics>,
}

impl Summary {
    /// Look up a campaign by exact name.
    pub fn campaign(&self, name: &str) -> Option<&CampaignMetrics> {
        self.campaign.get(name)
    }

    pub fn campaign_names(&self) -> impl Iterator<Item = &str> {
        self.campaign.keys().map(String::as_str)
    }

    /// Number of daily points available for windowed comparisons.
    pub fn daily_len(&self) -> usize {
        self.daily.len()
    }
}
