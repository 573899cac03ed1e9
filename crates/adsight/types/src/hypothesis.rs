use serde::{Deserialize, Serialize};

const CREATIVE_PREFIX: &str = "h_creative_";

/// Which summary metric a hypothesis is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Roas,
    Ctr,
    #[default]
    None,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roas => write!(f, "roas"),
            Self::Ctr => write!(f, "ctr"),
            Self::None => write!(f, "none"),
        }
    }
}

/// The closed set of hypothesis kinds the evaluator knows how to validate.
///
/// String ids are parsed into a kind once, at the boundary, by
/// [`HypothesisKind::from_id`]; everything downstream matches on the enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HypothesisKind {
    /// Mean daily ROAS fell between the prior and the most recent window.
    RoasDrop,
    /// A low-CTR campaign; `ordinal` is 1-based within the generator run.
    CreativeUnderperformance {
        ordinal: usize,
        campaign: Option<String>,
    },
    /// Cost per impression rising while reach stalls.
    AudienceSaturation,
    /// Changes concentrated on the named platforms.
    PlatformSpecific { platforms: Vec<String> },
    /// Revenue moved without matching click volume.
    DataQuality,
    /// Any id not in the set above.
    Unrecognized(String),
}

impl HypothesisKind {
    /// Parse a string id. Creative ids need a numeric suffix.
    pub fn from_id(id: &str) -> Self {
        match id {
            "h_roas_drop" => Self::RoasDrop,
            "h_audience_saturation" => Self::AudienceSaturation,
            "h_platform_specific" => Self::PlatformSpecific { platforms: Vec::new() },
            "h_data_quality" => Self::DataQuality,
            other => match other
                .strip_prefix(CREATIVE_PREFIX)
                .and_then(|n| n.parse::<usize>().ok())
            {
                Some(ordinal) => Self::CreativeUnderperformance {
                    ordinal,
                    campaign: None,
                },
                None => Self::Unrecognized(other.to_string()),
            },
        }
    }

    /// The stable string id for this kind.
    pub fn id(&self) -> String {
        match self {
            Self::RoasDrop => "h_roas_drop".into(),
            Self::CreativeUnderperformance { ordinal, .. } => {
                format!("{CREATIVE_PREFIX}{ordinal}")
            }
            Self::AudienceSaturation => "h_audience_saturation".into(),
            Self::PlatformSpecific { .. } => "h_platform_specific".into(),
            Self::DataQuality => "h_data_quality".into(),
            Self::Unrecognized(id) => id.clone(),
        }
    }
}

/// Caller-supplied before/after values for a metric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplicitEvidence {
    pub baseline: f64,
    pub current: f64,
    #[serde(default)]
    pub impressions: f64,
}

/// A candidate explanation for a performance change.
///
/// Created once per generator run and consumed once by the evaluator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "HypothesisRecord", into = "HypothesisRecord")]
pub struct Hypothesis {
    pub id: String,
    pub kind: HypothesisKind,
    /// Human-readable claim.
    pub text: String,
    pub reasoning: String,
    pub metric: Metric,
    /// Campaign or platform the claim concerns; `None` for account-wide.
    pub segment: Option<String>,
    /// Advisory only; the evaluator does not enforce these.
    pub expected_signals: Vec<String>,
    /// Generator's own guess in [0, 1], independent of evaluator confidence.
    pub prior_confidence: f64,
    pub evidence: Option<ExplicitEvidence>,
}

pub const DEFAULT_PRIOR_CONFIDENCE: f64 = 0.5;

impl Hypothesis {
    pub fn new(kind: HypothesisKind, text: impl Into<String>) -> Self {
        Self {
            id: kind.id(),
            kind,
            text: text.into(),
            reasoning: String::new(),
            metric: Metric::None,
            segment: None,
            expected_signals: Vec::new(),
            prior_confidence: DEFAULT_PRIOR_CONFIDENCE,
            evidence: None,
        }
    }

    /// Build from a raw string id, keeping the id verbatim.
    pub fn from_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        let mut h = Self::new(HypothesisKind::from_id(&id), text);
        h.id = id;
        h
    }

    /// A hypothesis carrying explicit baseline/current values.
    pub fn explicit(
        id: impl Into<String>,
        text: impl Into<String>,
        baseline: f64,
        current: f64,
        impressions: f64,
    ) -> Self {
        Self::from_id(id, text).with_evidence(ExplicitEvidence {
            baseline,
            current,
            impressions,
        })
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    pub fn with_expected_signals<I, S>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_signals = signals.into_iter().map(Into::into).collect();
        self
    }

    /// Clamped into [0, 1].
    pub fn with_prior_confidence(mut self, prior: f64) -> Self {
        self.prior_confidence = clamp_unit(prior);
        self
    }

    pub fn with_evidence(mut self, evidence: ExplicitEvidence) -> Self {
        self.evidence = Some(evidence);
        self
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Wire shape of a hypothesis. Explicit evidence travels as top-level
/// `baseline` / `current` / `impressions` fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct HypothesisRecord {
    #[serde(alias = "hypothesis_id")]
    id: String,
    #[serde(default, alias = "hypothesis")]
    text: String,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    metric: Metric,
    #[serde(default)]
    segment: Option<String>,
    #[serde(default)]
    expected_signals: Vec<String>,
    #[serde(default = "default_prior", alias = "confidence")]
    prior_confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    baseline: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impressions: Option<f64>,
}

fn default_prior() -> f64 {
    DEFAULT_PRIOR_CONFIDENCE
}

impl From<HypothesisRecord> for Hypothesis {
    fn from(r: HypothesisRecord) -> Self {
        let mut kind = HypothesisKind::from_id(&r.id);
        match &mut kind {
            HypothesisKind::CreativeUnderperformance { campaign, .. } => {
                campaign.clone_from(&r.segment);
            }
            HypothesisKind::PlatformSpecific { platforms } => {
                // segment is the comma-joined platform list
                *platforms = r
                    .segment
                    .iter()
                    .flat_map(|s| s.split(','))
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
            }
            _ => {}
        }
        let evidence = match (r.baseline, r.current) {
            (Some(baseline), Some(current)) => Some(ExplicitEvidence {
                baseline,
                current,
                impressions: r.impressions.unwrap_or(0.0),
            }),
            _ => None,
        };
        Self {
            id: r.id,
            kind,
            text: r.text,
            reasoning: r.reasoning,
            metric: r.metric,
            segment: r.segment,
            expected_signals: r.expected_signals,
            prior_confidence: clamp_unit(r.prior_confidence),
            evidence,
        }
    }
}

impl From<Hypothesis> for HypothesisRecord {
    fn from(h: Hypothesis) -> Self {
        Self {
            id: h.id,
            text: h.text,
            reasoning: h.reasoning,
            metric: h.metric,
            segment: h.segment,
            expected_signals: h.expected_signals,
            prior_confidence: h.prior_confidence,
            baseline: h.evidence.map(|e| e.baseline),
            current: h.evidence.map(|e| e.current),
            impressions: h.evidence.map(|e| e.impressions),
        }
    }
}
