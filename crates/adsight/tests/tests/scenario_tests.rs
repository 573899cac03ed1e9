#[path = "scenarios/roas_drop.rs"]
mod roas_drop;

#[path = "scenarios/low_ctr_creative.rs"]
mod low_ctr_creative;

#[path = "scenarios/platform_keywords.rs"]
mod platform_keywords;

#[path = "scenarios/explicit_evidence.rs"]
mod explicit_evidence;

#[path = "scenarios/unrecognized_id.rs"]
mod unrecognized_id;

#[path = "scenarios/concurrent_batch.rs"]
mod concurrent_batch;
