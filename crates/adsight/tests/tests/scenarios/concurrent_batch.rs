//! End-to-end: concurrent evaluation matches sequential evaluation and
//! contains per-item failures.

use std::sync::Arc;

use adsight_evaluation::Evaluator;
use adsight_insight::HypothesisGenerator;
use adsight_tests::{campaign_record, daily_records, roas_step, summarize};
use adsight_types::{Hypothesis, ValidationStatus};

fn mixed_batch() -> (Vec<Hypothesis>, adsight_types::Summary) {
    let mut records = daily_records("Facebook Feed", &roas_step(3.0, 1.5));
    records.push(campaign_record("Low CTR", 2000.0, 4.0));
    let summary = summarize(&records);

    let mut hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    hypotheses.push(Hypothesis::explicit("h_nan", "broken", f64::NAN, 1.0, 1000.0));
    hypotheses.push(Hypothesis::explicit("h_zero", "zero", 0.0, 1.0, 1000.0));
    hypotheses.push(Hypothesis::from_id("h_unknown", "unknown"));
    (hypotheses, summary)
}

#[tokio::test]
async fn concurrent_equals_sequential() {
    let (hypotheses, summary) = mixed_batch();
    let evaluator = Arc::new(Evaluator::with_defaults());
    let sequential = evaluator.validate(&hypotheses, &summary);
    let concurrent = Arc::clone(&evaluator)
        .validate_concurrent(hypotheses.clone().into(), Arc::new(summary))
        .await;

    assert_eq!(concurrent.len(), hypotheses.len());
    assert_eq!(sequential, concurrent);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn failure_confined_to_its_slot() {
    let (hypotheses, summary) = mixed_batch();
    let results = Arc::new(Evaluator::with_defaults())
        .validate_concurrent(hypotheses.clone().into(), Arc::new(summary))
        .await;

    for (h, r) in hypotheses.iter().zip(&results) {
        assert_eq!(h.id, r.hypothesis_id);
        match h.id.as_str() {
            "h_nan" => assert_eq!(r.status, ValidationStatus::Failed),
            "h_zero" => assert_eq!(r.status, ValidationStatus::Skipped),
            _ => assert_eq!(r.status, ValidationStatus::Evaluated),
        }
    }
    let roas = results.iter().find(|r| r.hypothesis_id == "h_roas_drop").unwrap();
    assert!(roas.validated);
}
