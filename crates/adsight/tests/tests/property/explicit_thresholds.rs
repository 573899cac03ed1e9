//! Property tests: an explicit before/after hypothesis is only validated
//! when all three thresholds hold.

use adsight_evaluation::Evaluator;
use adsight_tests::summarize;
use adsight_types::{AnalysisConfig, Hypothesis, ValidationStatus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn validated_implies_every_threshold(
        baseline in -500.0..500.0f64,
        current in -500.0..500.0f64,
        impressions in 0.0..12_000.0f64,
    ) {
        let config = AnalysisConfig::default();
        let summary = summarize(&[adsight_tests::campaign_record("Search Brand", 1000.0, 20.0)]);
        let h = Hypothesis::explicit("h_explicit", "explicit", baseline, current, impressions);
        let r = Evaluator::new(config.clone()).validate_one(&h, &summary);

        if baseline == 0.0 {
            prop_assert_eq!(r.status, ValidationStatus::Skipped);
        }
        if r.validated {
            let rel = r.evidence.relative_delta.unwrap_or_default();
            let impr = r.evidence.impressions.unwrap_or_default();
            prop_assert!(rel >= config.min_relative_drop_pct);
            prop_assert!(impr >= config.min_impressions_for_insight as f64);
            prop_assert!(r.confidence >= config.min_confidence);
        }
    }

    #[test]
    fn relative_delta_never_negative(
        baseline in prop_oneof![-500.0..-0.01f64, 0.01..500.0f64],
        current in -500.0..500.0f64,
    ) {
        let summary = summarize(&[adsight_tests::campaign_record("Search Brand", 1000.0, 20.0)]);
        let h = Hypothesis::explicit("h_explicit", "explicit", baseline, current, 1000.0);
        let r = Evaluator::with_defaults().validate_one(&h, &summary);
        prop_assert!(r.evidence.relative_delta.unwrap_or(-1.0) >= 0.0);
    }
}
