//! Property tests: windowed strategies on fewer than 14 days report
//! insufficient data instead of failing.

use adsight_evaluation::Evaluator;
use adsight_tests::{daily_records, summarize};
use adsight_types::{Hypothesis, HypothesisKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn short_history_is_insufficient(roas in prop::collection::vec(0.0..10.0f64, 1..14)) {
        let summary = summarize(&daily_records("Search Brand", &roas));
        let hypotheses = [
            Hypothesis::new(HypothesisKind::RoasDrop, "roas"),
            Hypothesis::new(HypothesisKind::AudienceSaturation, "saturation"),
            Hypothesis::new(HypothesisKind::DataQuality, "data quality"),
        ];

        for r in Evaluator::with_defaults().validate(&hypotheses, &summary) {
            prop_assert!(!r.validated);
            prop_assert!(!r.is_error());
            let note = r.evidence.note.unwrap_or_default();
            prop_assert!(note.starts_with("insufficient data"), "note: {}", note);
        }
    }
}
