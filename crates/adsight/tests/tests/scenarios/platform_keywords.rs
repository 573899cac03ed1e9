//! End-to-end: the platform rule only fires on configured keywords.

use adsight_insight::HypothesisGenerator;
use adsight_tests::{campaign_record, summarize};
use adsight_types::{AnalysisConfig, HypothesisKind};

#[test]
fn no_platform_names_no_hypothesis() {
    let summary = summarize(&[
        campaign_record("Search Brand", 1000.0, 40.0),
        campaign_record("Display Prospecting", 1000.0, 40.0),
    ]);
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    assert!(hypotheses.iter().all(|h| h.id != "h_platform_specific"));
}

#[test]
fn matched_platforms_named() {
    let summary = summarize(&[
        campaign_record("Instagram Stories", 1000.0, 40.0),
        campaign_record("facebook feed", 1000.0, 40.0),
        campaign_record("FACEBOOK retargeting", 1000.0, 40.0),
    ]);
    let hypotheses = HypothesisGenerator::with_defaults().generate(&summary);
    let h = hypotheses
        .iter()
        .find(|h| h.id == "h_platform_specific")
        .unwrap();
    assert_eq!(h.prior_confidence, 0.4);
    assert_eq!(
        h.kind,
        HypothesisKind::PlatformSpecific {
            platforms: vec!["facebook".into(), "instagram".into()]
        }
    );
}

#[test]
fn custom_keyword_set() {
    let summary = summarize(&[campaign_record("TikTok Spark", 1000.0, 40.0)]);
    let config = AnalysisConfig {
        platform_keywords: vec!["TikTok".into()],
        ..Default::default()
    };
    let hypotheses = HypothesisGenerator::new(config).generate(&summary);
    assert!(hypotheses.iter().any(|h| h.id == "h_platform_specific"));
}
