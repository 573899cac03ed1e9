//! End-to-end: a halved ROAS across the two trailing windows is proposed
//! and validated.

use adsight_evaluation::Evaluator;
use adsight_insight::HypothesisGenerator;
use adsight_tests::{daily_records, roas_step, summarize};
use adsight_types::{Impact, Metric};

#[test]
fn step_drop_generated_and_validated() {
    let summary = summarize(&daily_records("Search Brand", &roas_step(3.0, 1.5)));
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);

    let h = hypotheses
        .iter()
        .find(|h| h.id == "h_roas_drop")
        .expect("roas drop proposed");
    assert_eq!(h.prior_confidence, 0.65);
    assert_eq!(h.metric, Metric::Roas);
    assert!(h.segment.is_none());

    let r = Evaluator::with_defaults().validate_one(h, &summary);
    assert!(r.validated);
    assert_eq!(r.impact, Impact::High);
    assert!(r.evidence.p_value.unwrap() < 0.1);
    assert_eq!(r.evidence.effect, Some(1.5));
    assert_eq!(r.evidence.prev_mean, Some(3.0));
    assert_eq!(r.evidence.last_mean, Some(1.5));
}

#[test]
fn noisy_drop_still_significant() {
    let roas = [
        3.1, 2.9, 3.0, 3.2, 2.8, 3.05, 2.95, 1.6, 1.4, 1.5, 1.55, 1.45, 1.52, 1.48,
    ];
    let summary = summarize(&daily_records("Search Brand", &roas));
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    let results = Evaluator::with_defaults().validate(&hypotheses, &summary);
    let r = results.iter().find(|r| r.hypothesis_id == "h_roas_drop").unwrap();
    assert!(r.validated);
    assert!(r.evidence.t_statistic.unwrap() > 0.0);
    assert!(r.evidence.degrees_of_freedom.unwrap() > 1.0);
}

#[test]
fn steady_roas_not_proposed() {
    let summary = summarize(&daily_records("Search Brand", &[2.0; 14]));
    let ids: Vec<_> = HypothesisGenerator::with_defaults()
        .generate(&summary)
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(ids, vec!["h_audience_saturation", "h_data_quality"]);
}
