#[path = "property/confidence_bounds.rs"]
mod confidence_bounds;

#[path = "property/result_alignment.rs"]
mod result_alignment;

#[path = "property/explicit_thresholds.rs"]
mod explicit_thresholds;

#[path = "property/short_history.rs"]
mod short_history;
