//! adsight Evaluation - statistical validation of hypotheses
//!
//! Scores each hypothesis against the evidence in a metrics summary:
//!
//! - **Explicit** before/after values: relative delta, impact and confidence
//! - **ROAS drop**: Welch's t-test over the two trailing 7-day windows
//! - **Creative**: campaign CTR against the low-CTR threshold
//! - **Audience saturation**: cost-per-impression change between windows
//! - **Data quality**: revenue drop without a matching click change
//!
//! One result per hypothesis, in input order. A failure while evaluating
//! one hypothesis is confined to that hypothesis's result.

#![deny(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod report;
pub mod scoring;
pub mod stats;
pub mod strategies;

#[cfg(test)]
mod test_support;

pub use error::{EvaluationError, StatsError};
pub use evaluator::Evaluator;
pub use report::{EvaluationReport, OutcomeCounts};
pub use stats::{welch_t_test, WelchTest};
pub use strategies::Outcome;
