use adsight_types::{AnalysisConfig, Hypothesis, Summary};
use tracing::{debug, info};

use crate::rules::{default_rules, HypothesisRule};

/// Proposes candidate explanations from a metrics summary.
///
/// Runs every rule in order and concatenates what they propose. Pure and
/// deterministic: the same summary and config always give the same list.
pub struct HypothesisGenerator {
    config: AnalysisConfig,
    rules: Vec<Box<dyn HypothesisRule>>,
}

impl HypothesisGenerator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// Use a custom rule set instead of the built-in five.
    pub fn with_rules(config: AnalysisConfig, rules: Vec<Box<dyn HypothesisRule>>) -> Self {
        Self { config, rules }
    }

    pub fn generate(&self, summary: &Summary) -> Vec<Hypothesis> {
        let mut hypotheses = Vec::new();
        for rule in &self.rules {
            let proposed = rule.propose(summary, &self.config);
            debug!(rule = rule.name(), proposed = proposed.len(), "rule evaluated");
            hypotheses.extend(proposed);
        }
        info!(count = hypotheses.len(), "hypotheses generated");
        hypotheses
    }
}

impl Default for HypothesisGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
