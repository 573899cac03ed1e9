use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use adsight_types::{AnalysisConfig, Hypothesis, HypothesisKind, Summary, ValidationResult};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::EvaluationError;
use crate::strategies::{self, Outcome};

/// Scores hypotheses against the evidence in a [`Summary`].
///
/// Every entry point returns exactly one result per hypothesis, in input
/// order. A failure while evaluating one hypothesis, panics included,
/// becomes a failed result for that hypothesis and nothing else.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: AnalysisConfig,
}

impl Evaluator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Pick and run the strategy for one hypothesis.
    ///
    /// Explicit before/after values take precedence over the hypothesis
    /// kind.
    pub fn evaluate(
        &self,
        hypothesis: &Hypothesis,
        summary: &Summary,
    ) -> Result<Outcome, EvaluationError> {
        if let Some(evidence) = &hypothesis.evidence {
            return strategies::explicit(evidence, &self.config);
        }
        match &hypothesis.kind {
            HypothesisKind::RoasDrop => strategies::roas_drop(summary, &self.config),
            HypothesisKind::CreativeUnderperformance { campaign, .. } => {
                strategies::creative(hypothesis, campaign.as_deref(), summary, &self.config)
            }
            HypothesisKind::AudienceSaturation => {
                strategies::audience_saturation(summary, &self.config)
            }
            HypothesisKind::DataQuality => strategies::data_quality(summary, &self.config),
            HypothesisKind::PlatformSpecific { .. } | HypothesisKind::Unrecognized(_) => {
                Ok(Outcome::no_logic())
            }
        }
    }

    /// Evaluate one hypothesis. Never panics.
    pub fn validate_one(&self, hypothesis: &Hypothesis, summary: &Summary) -> ValidationResult {
        let result = match contain(|| self.evaluate(hypothesis, summary)) {
            Ok(Outcome::Skipped { reason }) => {
                warn!(hypothesis = %hypothesis.id, %reason, "hypothesis skipped");
                ValidationResult::skipped(hypothesis, reason)
            }
            Ok(outcome) => outcome.into_result(hypothesis),
            Err(e) => {
                error!(hypothesis = %hypothesis.id, error = %e, "evaluation failed");
                ValidationResult::failed(hypothesis, e)
            }
        };
        debug!(
            hypothesis = %result.hypothesis_id,
            status = ?result.status,
            validated = result.validated,
            impact = %result.impact,
            confidence = result.confidence,
            "hypothesis evaluated"
        );
        result
    }

    /// Evaluate a batch sequentially.
    pub fn validate(&self, hypotheses: &[Hypothesis], summary: &Summary) -> Vec<ValidationResult> {
        let results: Vec<_> = hypotheses
            .iter()
            .map(|h| self.validate_one(h, summary))
            .collect();
        log_batch(&results);
        results
    }

    /// Evaluate a batch with one blocking task per hypothesis.
    ///
    /// Results are reassembled by index. A task that never reports back
    /// yields a failed result in its own slot.
    pub async fn validate_concurrent(
        self: Arc<Self>,
        hypotheses: Arc<[Hypothesis]>,
        summary: Arc<Summary>,
    ) -> Vec<ValidationResult> {
        let mut tasks = JoinSet::new();
        for index in 0..hypotheses.len() {
            let evaluator = Arc::clone(&self);
            let hypotheses = Arc::clone(&hypotheses);
            let summary = Arc::clone(&summary);
            tasks.spawn_blocking(move || {
                (index, evaluator.validate_one(&hypotheses[index], &summary))
            });
        }

        let mut slots: Vec<Option<ValidationResult>> =
            (0..hypotheses.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => warn!(error = %e, "evaluation task did not complete"),
            }
        }

        let results = reassemble(slots, &hypotheses);
        log_batch(&results);
        results
    }
}

/// Fill each empty slot with a [`EvaluationError::TaskAborted`] failure for
/// the hypothesis at that index.
fn reassemble(
    slots: Vec<Option<ValidationResult>>,
    hypotheses: &[Hypothesis],
) -> Vec<ValidationResult> {
    slots
        .into_iter()
        .zip(hypotheses)
        .map(|(slot, h)| {
            slot.unwrap_or_else(|| {
                error!(hypothesis = %h.id, "no result reported; marking failed");
                ValidationResult::failed(h, EvaluationError::TaskAborted)
            })
        })
        .collect()
}

/// Run `f`, turning a panic into [`EvaluationError::Panicked`].
fn contain<F>(f: F) -> Result<Outcome, EvaluationError>
where
    F: FnOnce() -> Result<Outcome, EvaluationError>,
{
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(EvaluationError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn log_batch(results: &[ValidationResult]) {
    let validated = results.iter().filter(|r| r.validated).count();
    let failed = results.iter().filter(|r| r.is_error()).count();
    info!(total = results.len(), validated, failed, "evaluation complete");
}
