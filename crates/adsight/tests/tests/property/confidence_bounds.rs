//! Property tests: every result carries a confidence in [0, 1], and a failed
//! result is always inert.

use adsight_evaluation::Evaluator;
use adsight_ingestion::AdRecord;
use adsight_insight::HypothesisGenerator;
use adsight_tests::{start_date, summarize};
use adsight_types::{Hypothesis, Impact};
use chrono::Duration;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_amount(max: f64) -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0..max,
        1 => Just(0.0),
        1 => Just(f64::NAN),
    ]
}

fn arb_record() -> impl Strategy<Value = AdRecord> {
    (
        0i64..28,
        prop_oneof![
            Just("Facebook Retargeting"),
            Just("IG Instagram Stories"),
            Just("Search Brand"),
            Just("Display Prospecting"),
        ],
        arb_amount(1_000.0),
        arb_amount(10_000.0),
        arb_amount(300.0),
        arb_amount(5_000.0),
    )
        .prop_map(|(day, campaign, spend, impressions, clicks, revenue)| {
            AdRecord::new(
                start_date() + Duration::days(day),
                campaign,
                spend,
                impressions,
                clicks,
                revenue,
            )
        })
}

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        6 => -1_000.0..1_000.0f64,
        1 => Just(0.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn arb_explicit() -> impl Strategy<Value = Hypothesis> {
    (arb_value(), arb_value(), 0.0..20_000.0f64).prop_map(|(baseline, current, impressions)| {
        Hypothesis::explicit("h_explicit", "explicit change", baseline, current, impressions)
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(
        records in prop::collection::vec(arb_record(), 1..80),
        explicit in prop::collection::vec(arb_explicit(), 0..6),
    ) {
        let summary = summarize(&records);
        let mut hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
        hypotheses.extend(explicit);

        for r in Evaluator::with_defaults().validate(&hypotheses, &summary) {
            prop_assert!((0.0..=1.0).contains(&r.confidence), "confidence {}", r.confidence);
            if r.is_error() {
                prop_assert!(!r.validated);
                prop_assert_eq!(r.confidence, 0.0);
                prop_assert_eq!(r.impact, Impact::Unknown);
            }
        }
    }

    #[test]
    fn generated_priors_in_unit_interval(records in prop::collection::vec(arb_record(), 1..80)) {
        let summary = summarize(&records);
        for h in HypothesisGenerator::with_defaults().generate(&summary) {
            prop_assert!((0.0..=1.0).contains(&h.prior_confidence));
        }
    }
}
