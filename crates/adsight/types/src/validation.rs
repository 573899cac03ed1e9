use serde::{Deserialize, Serialize};

use crate::hypothesis::{Hypothesis, Metric};

/// Categorical severity derived from relative delta magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Unknown,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// How a hypothesis left the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// A strategy ran (its verdict may still be `validated = false`).
    Evaluated,
    /// Degenerate input, e.g. a zero explicit baseline.
    Skipped,
    /// Evaluation failed; `error` is set.
    Failed,
}

/// Numbers a strategy computed, kept so a result can be audited without
/// re-running it. Fields a strategy did not touch stay `None` and are left
/// out of the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evidence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    // explicit before/after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_delta_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<f64>,

    // window comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_statistic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees_of_freedom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,

    // cost per impression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_prev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_last: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_change: Option<f64>,

    // revenue vs clicks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_drop_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_clicks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_clicks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks_change: Option<f64>,

    // campaign lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_impressions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sample_size: Option<f64>,
}

impl Evidence {
    /// Evidence carrying only a descriptive note.
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Default::default()
        }
    }
}

/// The evaluator's verdict on one hypothesis.
///
/// Self-contained: interpreting it needs no further summary lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub hypothesis_id: String,
    pub hypothesis: String,
    pub metric: Metric,
    pub segment: Option<String>,
    pub status: ValidationStatus,
    pub validated: bool,
    pub impact: Impact,
    /// In [0, 1].
    pub confidence: f64,
    pub evidence: Evidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn evaluated(
        hypothesis: &Hypothesis,
        validated: bool,
        impact: Impact,
        confidence: f64,
        evidence: Evidence,
    ) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            status: ValidationStatus::Evaluated,
            validated,
            impact,
            confidence,
            evidence,
            error: None,
            ..Self::blank(hypothesis)
        }
    }

    /// Not evaluated because the input was degenerate.
    pub fn skipped(hypothesis: &Hypothesis, reason: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Skipped,
            evidence: Evidence::note(reason),
            ..Self::blank(hypothesis)
        }
    }

    /// Evaluation failed for this hypothesis only.
    pub fn failed(hypothesis: &Hypothesis, error: impl std::fmt::Display) -> Self {
        Self {
            status: ValidationStatus::Failed,
            error: Some(error.to_string()),
            ..Self::blank(hypothesis)
        }
    }

    fn blank(hypothesis: &Hypothesis) -> Self {
        Self {
            hypothesis_id: hypothesis.id.clone(),
            hypothesis: hypothesis.text.clone(),
            metric: hypothesis.metric,
            segment: hypothesis.segment.clone(),
            status: ValidationStatus::Skipped,
            validated: false,
            impact: Impact::Unknown,
            confidence: 0.0,
            evidence: Evidence::default(),
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_skipped(&self) -> bool {
        self.status == ValidationStatus::Skipped
    }
}
