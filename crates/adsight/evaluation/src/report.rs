use adsight_types::{ValidationResult, ValidationStatus};
use serde::{Deserialize, Serialize};

/// Tally of one evaluation batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub total: usize,
    pub evaluated: usize,
    pub validated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Evaluation results with their tally. `results` stays positionally
/// aligned with the hypotheses that produced it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub counts: OutcomeCounts,
    pub results: Vec<ValidationResult>,
}

impl EvaluationReport {
    pub fn summarize(results: Vec<ValidationResult>) -> Self {
        let mut counts = OutcomeCounts {
            total: results.len(),
            ..Default::default()
        };
        for r in &results {
            match r.status {
                ValidationStatus::Evaluated => {
                    counts.evaluated += 1;
                    if r.validated {
                        counts.validated += 1;
                    }
                }
                ValidationStatus::Skipped => counts.skipped += 1,
                ValidationStatus::Failed => counts.failed += 1,
            }
        }
        Self { counts, results }
    }

    /// Results whose strategy ran. Skipped and failed items are left out.
    pub fn evaluated(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results
            .iter()
            .filter(|r| r.status == ValidationStatus::Evaluated)
    }

    /// Evaluated results that confirmed their hypothesis.
    pub fn validated(&self) -> impl Iterator<Item = &ValidationResult> {
        self.evaluated().filter(|r| r.validated)
    }
}
