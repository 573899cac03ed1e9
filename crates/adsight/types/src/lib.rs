//! adsight Types - shared data model for the hypothesis pipeline
//!
//! Ingestion produces a [`Summary`]; the insight crate turns it into
//! [`Hypothesis`] values; the evaluation crate scores each one into a
//! [`ValidationResult`]. Every type here is immutable once built and
//! serializes to JSON.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod hypothesis;
pub mod summary;
pub mod validation;
pub mod window;

pub use config::{AnalysisConfig, ImpactProfile, ImpactThresholds};
pub use error::ConfigError;
pub use hypothesis::{ExplicitEvidence, Hypothesis, HypothesisKind, Metric};
pub use summary::{
    safe_ratio, CampaignMetrics, DailyMetrics, MetricAggregate, Summary, WindowMetrics,
};
pub use validation::{Evidence, Impact, ValidationResult, ValidationStatus};
pub use window::{finite_mean, relative_drop, WindowPair, MIN_DAILY_POINTS, WINDOW_DAYS};
