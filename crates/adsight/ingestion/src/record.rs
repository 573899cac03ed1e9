use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of raw ad-platform export: a campaign's numbers for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub date: NaiveDate,
    #[serde(default = "default_campaign_name")]
    pub campaign_name: String,
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub revenue: f64,
}

fn default_campaign_name() -> String {
    "unknown".to_string()
}

impl AdRecord {
    pub fn new(
        date: NaiveDate,
        campaign_name: impl Into<String>,
        spend: f64,
        impressions: f64,
        clicks: f64,
        revenue: f64,
    ) -> Self {
        Self {
            date,
            campaign_name: campaign_name.into(),
            spend,
            impressions,
            clicks,
            revenue,
        }
    }

    /// Replace non-finite numeric fields with `0.0`, returning how many were
    /// replaced.
    pub fn sanitize(&mut self) -> usize {
        let mut replaced = 0;
        for field in [
            &mut self.spend,
            &mut self.impressions,
            &mut self.clicks,
            &mut self.revenue,
        ] {
            if !field.is_finite() {
                *field = 0.0;
                replaced += 1;
            }
        }
        replaced
    }
}
