//! The five built-in hypothesis rules.
//!
//! Each rule inspects the summary on its own and proposes zero or more
//! hypotheses. Rules never see each other's output.

use std::collections::BTreeSet;

use adsight_types::{AnalysisConfig, Hypothesis, HypothesisKind, Metric, Summary, WindowPair};
use tracing::debug;

// ── Trait ────────────────────────────────────────────────────────────────

/// Pluggable hypothesis rule.
pub trait HypothesisRule: Send + Sync {
    /// Propose hypotheses for `summary`. An empty vec means no evidence.
    fn propose(&self, summary: &Summary, config: &AnalysisConfig) -> Vec<Hypothesis>;

    /// Name of this rule (for logging).
    fn name(&self) -> &str;
}

/// The built-in rules in their fixed evaluation order.
pub fn default_rules() -> Vec<Box<dyn HypothesisRule>> {
    vec![
        Box::new(RoasDropRule),
        Box::new(CreativeUnderperformanceRule),
        Box::new(AudienceSaturationRule),
        Box::new(PlatformRule),
        Box::new(DataQualityRule),
    ]
}

// ── 1. ROAS drop ────────────────────────────────────────────────────────

/// Mean daily ROAS of the last 7 days against the 7 before.
pub struct RoasDropRule;

impl HypothesisRule for RoasDropRule {
    fn propose(&self, summary: &Summary, config: &AnalysisConfig) -> Vec<Hypothesis> {
        let Some(pair) = WindowPair::split(&summary.daily) else {
            debug!(days = summary.daily_len(), "roas drop: not enough daily points");
            return vec![];
        };

        let (prev_mean, last_mean) = pair.means(|m| m.roas);
        let pct_drop = adsight_types::relative_drop(prev_mean, last_mean);
        debug!(prev_mean, last_mean, pct_drop, "roas drop: window means");

        if pct_drop <= config.roas_drop_threshold_pct {
            return vec![];
        }

        vec![Hypothesis::new(
            HypothesisKind::RoasDrop,
            format!(
                "Average daily ROAS fell by {:.2}% in the last 7 days vs the prior 7 days.",
                pct_drop * 100.0
            ),
        )
        .with_reasoning(
            "Significant relative decline in average daily ROAS detected across windows.",
        )
        .with_metric(Metric::Roas)
        .with_expected_signals(["roas_down", "revenue_down_or_spend_up", "ctr_down"])
        .with_prior_confidence(0.65)]
    }

    fn name(&self) -> &str {
        "roas_drop"
    }
}

// ── 2. Creative underperformance ────────────────────────────────────────

/// One hypothesis per low-CTR campaign, capped.
pub struct CreativeUnderperformanceRule;

impl HypothesisRule for CreativeUnderperformanceRule {
    fn propose(&self, summary: &Summary, config: &AnalysisConfig) -> Vec<Hypothesis> {
        summary
            .low_ctr_campaigns
            .iter()
            .take(config.max_creative_hypotheses)
            .enumerate()
            .map(|(i, c)| {
                Hypothesis::new(
                    HypothesisKind::CreativeUnderperformance {
                        ordinal: i + 1,
                        campaign: Some(c.campaign_name.clone()),
                    },
                    format!(
                        "Campaign '{}' has low CTR ({:.3}%) suggesting creative underperformance or poor relevance.",
                        c.campaign_name,
                        c.metrics.ctr * 100.0
                    ),
                )
                .with_reasoning(
                    "Campaign-level CTR below configured threshold; creatives may not be resonating.",
                )
                .with_metric(Metric::Ctr)
                .with_segment(c.campaign_name.clone())
                .with_expected_signals(["low_ctr", "low_clicks", "low_conversion_rate"])
                .with_prior_confidence(0.7)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "creative_underperformance"
    }
}

// ── 3. Audience saturation ──────────────────────────────────────────────

/// Standing lead; the evaluator's cost-per-impression check decides it.
pub struct AudienceSaturationRule;

impl HypothesisRule for AudienceSaturationRule {
    fn propose(&self, _summary: &Summary, _config: &AnalysisConfig) -> Vec<Hypothesis> {
        vec![Hypothesis::new(
            HypothesisKind::AudienceSaturation,
            "Possible audience saturation or targeting overlap leading to higher costs (CPM) and lower ROAS.",
        )
        .with_reasoning(
            "When impressions plateau but cost increases, it indicates saturation or audience overlap.",
        )
        .with_metric(Metric::Roas)
        .with_expected_signals(["impressions_flat", "cpm_up", "frequency_up"])
        .with_prior_confidence(0.45)]
    }

    fn name(&self) -> &str {
        "audience_saturation"
    }
}

// ── 4. Platform ─────────────────────────────────────────────────────────

/// Campaign names mentioning a configured platform keyword.
pub struct PlatformRule;

impl PlatformRule {
    /// Matched keywords, sorted and deduplicated.
    pub fn matched_platforms(summary: &Summary, config: &AnalysisConfig) -> Vec<String> {
        let keywords = config.normalized_keywords();
        let mut matched = BTreeSet::new();
        for name in summary.campaign_names() {
            let lowered = name.to_lowercase();
            for keyword in &keywords {
                if lowered.contains(keyword.as_str()) {
                    matched.insert(keyword.clone());
                }
            }
        }
        matched.into_iter().collect()
    }
}

impl HypothesisRule for PlatformRule {
    fn propose(&self, summary: &Summary, config: &AnalysisConfig) -> Vec<Hypothesis> {
        let platforms = Self::matched_platforms(summary, config);
        if platforms.is_empty() {
            return vec![];
        }
        let joined = platforms.join(", ");
        vec![Hypothesis::new(
            HypothesisKind::PlatformSpecific {
                platforms: platforms.clone(),
            },
            format!("Performance changes may be concentrated on platform(s): {joined}."),
        )
        .with_reasoning(
            "Campaign naming indicates platform-specific targeting; platform-level issues or bid changes may affect ROAS.",
        )
        .with_segment(joined)
        .with_expected_signals(["platform_roas_change", "platform_ctr_change"])
        .with_prior_confidence(0.4)]
    }

    fn name(&self) -> &str {
        "platform"
    }
}

// ── 5. Data quality ─────────────────────────────────────────────────────

/// Standing fallback lead for tracking/attribution problems.
pub struct DataQualityRule;

impl HypothesisRule for DataQualityRule {
    fn propose(&self, _summary: &Summary, _config: &AnalysisConfig) -> Vec<Hypothesis> {
        vec![Hypothesis::new(
            HypothesisKind::DataQuality,
            "Possible tracking or attribution issues causing artificial ROAS fluctuations.",
        )
        .with_reasoning(
            "If purchases or revenue drop without a commensurate drop in clicks/impressions, tracking might be affected.",
        )
        .with_metric(Metric::Roas)
        .with_expected_signals([
            "revenue_drop_without_click_drop",
            "sudden_zero_values",
            "missing_dates",
        ])
        .with_prior_confidence(0.3)]
    }

    fn name(&self) -> &str {
        "data_quality"
    }
}
