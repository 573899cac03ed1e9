//! End-to-end: a low-CTR campaign is proposed as a creative problem and
//! validated against its own metrics.

use adsight_evaluation::Evaluator;
use adsight_insight::HypothesisGenerator;
use adsight_tests::{campaign_record, summarize};
use adsight_types::{HypothesisKind, Metric};

#[test]
fn low_ctr_campaign_validated() {
    let summary = summarize(&[campaign_record("X", 1000.0, 5.0)]);
    assert_eq!(summary.low_ctr_campaigns.len(), 1);

    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    let h = hypotheses.iter().find(|h| h.id == "h_creative_1").unwrap();
    assert_eq!(h.metric, Metric::Ctr);
    assert_eq!(h.segment.as_deref(), Some("X"));
    assert!(matches!(
        &h.kind,
        HypothesisKind::CreativeUnderperformance { ordinal: 1, campaign: Some(c) } if c == "X"
    ));

    let r = Evaluator::with_defaults().validate_one(h, &summary);
    assert!(r.validated);
    assert_eq!(r.evidence.campaign.as_deref(), Some("X"));
    assert_eq!(r.evidence.ctr, Some(0.005));
    assert_eq!(r.evidence.min_sample_size, Some(50.0));
}

#[test]
fn healthy_campaign_not_proposed() {
    let summary = summarize(&[campaign_record("Healthy", 1000.0, 50.0)]);
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    assert!(hypotheses.iter().all(|h| !h.id.starts_with("h_creative_")));
}

#[test]
fn round_tripped_hypothesis_keeps_campaign() {
    let summary = summarize(&[
        campaign_record("Alpha", 1000.0, 50.0),
        campaign_record("Beta", 2000.0, 2.0),
    ]);
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    let json = serde_json::to_string(&hypotheses).unwrap();
    let decoded: Vec<adsight_types::Hypothesis> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, hypotheses);

    let results = Evaluator::with_defaults().validate(&decoded, &summary);
    let creative = results.iter().find(|r| r.hypothesis_id == "h_creative_1").unwrap();
    assert_eq!(creative.evidence.campaign.as_deref(), Some("Beta"));
    assert!(creative.validated);
}
