//! Thresholds shared by the generator and the evaluator.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Impact cutoffs on relative delta: `>= high` is high, `>= medium` is
/// medium, anything else low.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactThresholds {
    pub high: f64,
    pub medium: f64,
}

/// Named impact tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactProfile {
    /// 0.40 / 0.25
    #[default]
    Strict,
    /// 0.30 / 0.15
    Lenient,
}

impl ImpactProfile {
    pub fn thresholds(&self) -> ImpactThresholds {
        match self {
            Self::Strict => ImpactThresholds {
                high: 0.40,
                medium: 0.25,
            },
            Self::Lenient => ImpactThresholds {
                high: 0.30,
                medium: 0.15,
            },
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Relative ROAS drop that triggers `h_roas_drop`
    #[serde(default = "default_roas_drop_threshold")]
    pub roas_drop_threshold_pct: f64,

    /// CTR below which a campaign counts as low-CTR
    #[serde(default = "default_low_ctr_threshold")]
    pub low_ctr_threshold: f64,

    /// Minimum campaign impressions for the creative check
    #[serde(default = "default_min_impressions_for_stat")]
    pub min_impressions_for_stat: u64,

    /// Minimum impressions for an explicit-evidence hypothesis to validate
    #[serde(default = "default_min_impressions_for_insight")]
    pub min_impressions_for_insight: u64,

    /// Minimum relative delta for an explicit-evidence hypothesis to validate
    #[serde(default = "default_min_relative_drop")]
    pub min_relative_drop_pct: f64,

    /// Minimum evaluator confidence for an explicit-evidence hypothesis
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Keywords scanned (case-insensitively) in campaign names
    #[serde(default = "default_platform_keywords")]
    pub platform_keywords: Vec<String>,

    /// p-value cutoff for the ROAS significance test
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,

    /// Relative cost-per-impression rise that signals saturation
    #[serde(default = "default_cpm_increase_threshold")]
    pub cpm_increase_threshold: f64,

    /// Relative revenue drop for the data-quality check
    #[serde(default = "default_revenue_drop_threshold")]
    pub revenue_drop_threshold: f64,

    /// Click-volume change below which clicks count as stable
    #[serde(default = "default_click_stability_threshold")]
    pub click_stability_threshold: f64,

    /// Cap on creative hypotheses per run
    #[serde(default = "default_max_creative_hypotheses")]
    pub max_creative_hypotheses: usize,

    #[serde(default)]
    pub impact_profile: ImpactProfile,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            roas_drop_threshold_pct: default_roas_drop_threshold(),
            low_ctr_threshold: default_low_ctr_threshold(),
            min_impressions_for_stat: default_min_impressions_for_stat(),
            min_impressions_for_insight: default_min_impressions_for_insight(),
            min_relative_drop_pct: default_min_relative_drop(),
            min_confidence: default_min_confidence(),
            platform_keywords: default_platform_keywords(),
            significance_level: default_significance_level(),
            cpm_increase_threshold: default_cpm_increase_threshold(),
            revenue_drop_threshold: default_revenue_drop_threshold(),
            click_stability_threshold: default_click_stability_threshold(),
            max_creative_hypotheses: default_max_creative_hypotheses(),
            impact_profile: ImpactProfile::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject values outside their meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = [
            ("roas_drop_threshold_pct", self.roas_drop_threshold_pct),
            ("low_ctr_threshold", self.low_ctr_threshold),
            ("min_relative_drop_pct", self.min_relative_drop_pct),
            ("min_confidence", self.min_confidence),
            ("significance_level", self.significance_level),
            ("revenue_drop_threshold", self.revenue_drop_threshold),
            ("click_stability_threshold", self.click_stability_threshold),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if !self.cpm_increase_threshold.is_finite() || self.cpm_increase_threshold < 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "cpm_increase_threshold".into(),
                value: self.cpm_increase_threshold,
            });
        }
        if self.platform_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::EmptyKeyword);
        }
        Ok(())
    }

    /// Keywords lowercased for matching.
    pub fn normalized_keywords(&self) -> Vec<String> {
        self.platform_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .collect()
    }
}

// Default value helpers
fn default_roas_drop_threshold() -> f64 {
    0.15
}

fn default_low_ctr_threshold() -> f64 {
    0.01
}

fn default_min_impressions_for_stat() -> u64 {
    50
}

fn default_min_impressions_for_insight() -> u64 {
    500
}

fn default_min_relative_drop() -> f64 {
    0.20
}

fn default_min_confidence() -> f64 {
    0.6
}

fn default_platform_keywords() -> Vec<String> {
    vec!["facebook".to_string(), "instagram".to_string()]
}

fn default_significance_level() -> f64 {
    0.1
}

fn default_cpm_increase_threshold() -> f64 {
    0.10
}

fn default_revenue_drop_threshold() -> f64 {
    0.2
}

fn default_click_stability_threshold() -> f64 {
    0.1
}

fn default_max_creative_hypotheses() -> usize {
    10
}
