//! End-to-end: hypotheses the evaluator has no strategy for.

use adsight_evaluation::Evaluator;
use adsight_tests::{campaign_record, summarize};
use adsight_types::{Hypothesis, Metric, ValidationResult};

#[test]
fn unknown_id_without_metric() {
    let raw = r#"{"hypothesis_id": "h_moon_phase", "hypothesis": "the moon did it"}"#;
    let h: Hypothesis = serde_json::from_str(raw).unwrap();
    assert_eq!(h.metric, Metric::None);

    let summary = summarize(&[campaign_record("Search Brand", 1000.0, 20.0)]);
    let r = Evaluator::with_defaults().validate_one(&h, &summary);
    assert!(!r.validated);
    assert!(r.error.is_none());
    assert_eq!(
        r.evidence.note.as_deref(),
        Some("no validation logic for this hypothesis id")
    );
}

#[test]
fn results_serialize_self_contained() {
    let summary = summarize(&[campaign_record("Search Brand", 1000.0, 20.0)]);
    let h = Hypothesis::from_id("h_platform_specific", "platform").with_segment("facebook");
    let r = Evaluator::with_defaults().validate_one(&h, &summary);

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["hypothesis_id"], "h_platform_specific");
    assert_eq!(json["segment"], "facebook");
    assert_eq!(json["impact"], "low");
    assert!(json.get("error").is_none());

    let back: ValidationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
