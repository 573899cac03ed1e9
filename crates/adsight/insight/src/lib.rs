//! adsight Insight - hypothesis generation
//!
//! Turns a metrics [`Summary`](adsight_types::Summary) into an ordered list of
//! candidate explanations. Rules only propose; the evaluation crate decides
//! which ones hold.
//!
//! Built-in rules, in order:
//! - **ROAS drop**: last 7 days vs the prior 7
//! - **Creative underperformance**: one per low-CTR campaign (max 10)
//! - **Audience saturation**: always proposed
//! - **Platform**: campaign names matching platform keywords
//! - **Data quality**: always proposed

#![deny(unsafe_code)]

pub mod generator;
pub mod rules;


pub use generator::HypothesisGenerator;
pub use rules::{
    default_rules, AudienceSaturationRule, CreativeUnderperformanceRule, DataQualityRule,
    HypothesisRule, PlatformRule, RoasDropRule,
};
