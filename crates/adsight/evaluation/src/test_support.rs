use std::collections::BTreeMap;

use adsight_types::{CampaignMetrics, DailyMetrics, MetricAggregate, Summary};
use chrono::{Duration, NaiveDate};

/// One day of raw totals.
#[derive(Clone, Copy, Debug)]
pub struct Day {
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub revenue: f64,
}

impl Day {
    const BASE: Day = Day {
        spend: 100.0,
        impressions: 1000.0,
        clicks: 20.0,
        revenue: 200.0,
    };

    pub fn roas(roas: f64) -> Self {
        Self {
            revenue: 100.0 * roas,
            ..Self::BASE
        }
    }

    pub fn spend(spend: f64) -> Self {
        Self { spend, ..Self::BASE }
    }

    pub fn revenue(revenue: f64) -> Self {
        Self {
            revenue,
            ..Self::BASE
        }
    }
}

pub fn daily_summary(days: &[Day]) -> Summary {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let daily: Vec<DailyMetrics> = days
        .iter()
        .enumerate()
        .map(|(i, d)| DailyMetrics {
            date: start + Duration::days(i as i64),
            metrics: MetricAggregate::from_totals(d.spend, d.impressions, d.clicks, d.revenue),
        })
        .collect();
    Summary {
        totals: MetricAggregate::combine(daily.iter().map(|d| &d.metrics)),
        daily,
        campaign: BTreeMap::new(),
        recent_window: None,
        low_ctr_campaigns: vec![],
    }
}

/// A single campaign; listed as low-CTR when below the default threshold.
pub fn campaign_summary(name: &str, impressions: f64, clicks: f64) -> Summary {
    let entry = CampaignMetrics {
        campaign_name: name.to_string(),
        metrics: MetricAggregate::from_totals(50.0, impressions, clicks, 100.0),
    };
    let low_ctr = if entry.metrics.ctr < 0.01 {
        vec![entry.clone()]
    } else {
        vec![]
    };
    Summary {
        totals: entry.metrics,
        daily: vec![],
        campaign: BTreeMap::from([(name.to_string(), entry)]),
        recent_window: None,
        low_ctr_campaigns: low_ctr,
    }
}
