//! One validation strategy per hypothesis kind.
//!
//! Strategies are pure functions of the hypothesis, the summary and the
//! config. Missing evidence is an ordinary outcome, never an error.

use adsight_types::{
    finite_mean, relative_drop, AnalysisConfig, Evidence, ExplicitEvidence, Hypothesis, Impact,
    Summary, ValidationResult, WindowPair, MIN_DAILY_POINTS,
};

use crate::error::{EvaluationError, StatsError};
use crate::scoring::{
    blend, classify_impact, delta_factor, estimate_confidence, round2, round4, volume_factor,
};
use crate::stats::welch_t_test;

pub const NO_LOGIC_NOTE: &str = "no validation logic for this hypothesis id";
pub const CAMPAIGN_NOT_FOUND_NOTE: &str = "campaign not found";
pub const ZERO_BASELINE_NOTE: &str = "baseline is zero; relative delta undefined";

/// What a strategy concluded about one hypothesis.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Evaluated {
        validated: bool,
        impact: Impact,
        confidence: f64,
        evidence: Evidence,
    },
    /// Excluded from validated output.
    Skipped { reason: String },
}

impl Outcome {
    /// The strategy could not run; `validated = false`, zero confidence.
    pub fn unsupported(evidence: Evidence) -> Self {
        Self::Evaluated {
            validated: false,
            impact: Impact::Low,
            confidence: 0.0,
            evidence,
        }
    }

    pub fn no_logic() -> Self {
        Self::unsupported(Evidence::note(NO_LOGIC_NOTE))
    }

    fn insufficient_days(summary: &Summary) -> Self {
        Self::unsupported(Evidence::note(format!(
            "insufficient data: {} daily points, need {MIN_DAILY_POINTS}",
            summary.daily_len()
        )))
    }

    pub fn into_result(self, hypothesis: &Hypothesis) -> ValidationResult {
        match self {
            Self::Evaluated {
                validated,
                impact,
                confidence,
                evidence,
            } => ValidationResult::evaluated(hypothesis, validated, impact, confidence, evidence),
            Self::Skipped { reason } => ValidationResult::skipped(hypothesis, reason),
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite { field, value })
    }
}

fn fractional_change(from: f64, to: f64) -> f64 {
    if from > 0.0 {
        (to - from) / from
    } else {
        0.0
    }
}

// ── Explicit before/after ───────────────────────────────────────────────

pub fn explicit(
    evidence: &ExplicitEvidence,
    config: &AnalysisConfig,
) -> Result<Outcome, EvaluationError> {
    let baseline = require_finite("baseline", evidence.baseline)?;
    let current = require_finite("current", evidence.current)?;
    let impressions = require_finite("impressions", evidence.impressions)?;

    if baseline == 0.0 {
        return Ok(Outcome::Skipped {
            reason: ZERO_BASELINE_NOTE.to_string(),
        });
    }

    let absolute_delta = require_finite("absolute_delta", current - baseline)?;
    // Overflows for subnormal-scale baselines.
    let relative_delta = require_finite("relative_delta", absolute_delta.abs() / baseline.abs())?;
    let confidence = estimate_confidence(relative_delta, impressions);
    let impact = classify_impact(relative_delta, config.impact_profile.thresholds());
    let validated = relative_delta >= config.min_relative_drop_pct
        && impressions >= config.min_impressions_for_insight as f64
        && confidence >= config.min_confidence;

    Ok(Outcome::Evaluated {
        validated,
        impact,
        confidence,
        evidence: Evidence {
            baseline: Some(baseline),
            current: Some(current),
            absolute_delta: Some(round4(absolute_delta)),
            relative_delta: Some(relative_delta),
            relative_delta_pct: Some(round2(relative_delta * 100.0)),
            impressions: Some(impressions),
            ..Default::default()
        },
    })
}

// ── ROAS drop ───────────────────────────────────────────────────────────

pub fn roas_drop(summary: &Summary, config: &AnalysisConfig) -> Result<Outcome, EvaluationError> {
    let Some(pair) = WindowPair::split(&summary.daily) else {
        return Ok(Outcome::insufficient_days(summary));
    };
    let (prev, last) = pair.values(|m| m.roas);
    let test = match welch_t_test(&prev, &last) {
        Ok(test) => test,
        Err(StatsError::InsufficientSamples { left, right }) => {
            return Ok(Outcome::unsupported(Evidence::note(format!(
                "insufficient data: {left} and {right} finite ROAS values per window"
            ))));
        }
        Err(e) => return Err(e.into()),
    };

    let effect = test.mean_a - test.mean_b;
    let validated = test.p_value < config.significance_level && effect > 0.0;
    let rel = relative_drop(test.mean_a, test.mean_b).abs();
    let impressions = pair.impressions();

    Ok(Outcome::Evaluated {
        validated,
        impact: classify_impact(rel, config.impact_profile.thresholds()),
        confidence: blend(volume_factor(impressions), 1.0 - test.p_value),
        evidence: Evidence {
            prev_mean: Some(test.mean_a),
            last_mean: Some(test.mean_b),
            effect: Some(effect),
            t_statistic: test.t_statistic.is_finite().then_some(test.t_statistic),
            degrees_of_freedom: Some(test.degrees_of_freedom),
            p_value: Some(test.p_value),
            impressions: Some(impressions),
            ..Default::default()
        },
    })
}

// ── Creative underperformance ───────────────────────────────────────────

/// Text between the first pair of single quotes.
fn quoted_name(text: &str) -> Option<&str> {
    let mut parts = text.splitn(3, '\'');
    parts.next()?;
    match (parts.next(), parts.next()) {
        (Some(name), Some(_)) if !name.is_empty() => Some(name),
        _ => None,
    }
}

/// The campaign a creative hypothesis is about, most specific source first.
pub fn referenced_campaign<'a>(
    hypothesis: &'a Hypothesis,
    campaign: Option<&'a str>,
    summary: &'a Summary,
) -> Option<&'a str> {
    campaign
        .or(hypothesis.segment.as_deref())
        .or_else(|| quoted_name(&hypothesis.text))
        .or_else(|| {
            summary
                .low_ctr_campaigns
                .first()
                .map(|c| c.campaign_name.as_str())
        })
}

pub fn creative(
    hypothesis: &Hypothesis,
    campaign: Option<&str>,
    summary: &Summary,
    config: &AnalysisConfig,
) -> Result<Outcome, EvaluationError> {
    let Some(name) = referenced_campaign(hypothesis, campaign, summary) else {
        return Ok(Outcome::unsupported(Evidence::note(CAMPAIGN_NOT_FOUND_NOTE)));
    };
    let Some(found) = summary.campaign(name) else {
        return Ok(Outcome::unsupported(Evidence {
            campaign: Some(name.to_string()),
            ..Evidence::note(CAMPAIGN_NOT_FOUND_NOTE)
        }));
    };

    let ctr = found.metrics.ctr;
    let impressions = found.metrics.impressions;
    let min_sample = config.min_impressions_for_stat as f64;
    let validated = ctr < config.low_ctr_threshold && impressions >= min_sample;
    let shortfall = relative_drop(config.low_ctr_threshold, ctr).max(0.0);

    Ok(Outcome::Evaluated {
        validated,
        impact: classify_impact(shortfall, config.impact_profile.thresholds()),
        confidence: blend(volume_factor(impressions), delta_factor(shortfall)),
        evidence: Evidence {
            campaign: Some(name.to_string()),
            ctr: Some(ctr),
            campaign_impressions: Some(impressions),
            threshold: Some(config.low_ctr_threshold),
            min_sample_size: Some(min_sample),
            ..Default::default()
        },
    })
}

// ── Audience saturation ─────────────────────────────────────────────────

pub fn audience_saturation(
    summary: &Summary,
    config: &AnalysisConfig,
) -> Result<Outcome, EvaluationError> {
    let Some(pair) = WindowPair::split(&summary.daily) else {
        return Ok(Outcome::insufficient_days(summary));
    };
    let (prev, last) = pair.values(|m| m.cost_per_impression());
    let (cp_prev, cp_last) = (finite_mean(&prev), finite_mean(&last));
    let cp_change = fractional_change(cp_prev, cp_last);
    let impressions = pair.impressions();

    Ok(Outcome::Evaluated {
        validated: cp_change > config.cpm_increase_threshold,
        impact: classify_impact(cp_change.abs(), config.impact_profile.thresholds()),
        confidence: blend(volume_factor(impressions), delta_factor(cp_change.abs())),
        evidence: Evidence {
            cp_prev: Some(cp_prev),
            cp_last: Some(cp_last),
            cp_change: Some(cp_change),
            impressions: Some(impressions),
            ..Default::default()
        },
    })
}

// ── Data quality ────────────────────────────────────────────────────────

pub fn data_quality(
    summary: &Summary,
    config: &AnalysisConfig,
) -> Result<Outcome, EvaluationError> {
    let Some(pair) = WindowPair::split(&summary.daily) else {
        return Ok(Outcome::insufficient_days(summary));
    };
    let (prev_revenue, last_revenue) = pair.means(|m| m.revenue);
    let (prev_clicks, last_clicks) = pair.means(|m| m.clicks);
    let rev_drop_pct = relative_drop(prev_revenue, last_revenue);
    let clicks_change = fractional_change(prev_clicks, last_clicks);
    let impressions = pair.impressions();

    let validated = rev_drop_pct > config.revenue_drop_threshold
        && clicks_change.abs() < config.click_stability_threshold;

    Ok(Outcome::Evaluated {
        validated,
        impact: classify_impact(rev_drop_pct.abs(), config.impact_profile.thresholds()),
        confidence: blend(volume_factor(impressions), delta_factor(rev_drop_pct.abs())),
        evidence: Evidence {
            prev_revenue: Some(prev_revenue),
            last_revenue: Some(last_revenue),
            rev_drop_pct: Some(rev_drop_pct),
            prev_clicks: Some(prev_clicks),
            last_clicks: Some(last_clicks),
            clicks_change: Some(clicks_change),
            impressions: Some(impressions),
            ..Default::default()
        },
    })
}
