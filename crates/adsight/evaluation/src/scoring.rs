//! Confidence and impact scoring shared by every strategy.

use adsight_types::{Impact, ImpactThresholds};

/// Impressions at which the volume factor saturates.
pub const VOLUME_SATURATION: f64 = 5000.0;

/// Relative delta at which the delta factor saturates.
pub const DELTA_SATURATION: f64 = 0.5;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn saturating(value: f64, at: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        (value / at).min(1.0)
    } else {
        0.0
    }
}

/// `min(impressions / 5000, 1)`; zero for non-positive or non-finite input.
pub fn volume_factor(impressions: f64) -> f64 {
    saturating(impressions, VOLUME_SATURATION)
}

/// `min(relative_delta / 0.5, 1)`.
pub fn delta_factor(relative_delta: f64) -> f64 {
    saturating(relative_delta, DELTA_SATURATION)
}

/// Equal-weight blend of sample volume and signal strength, rounded to two
/// decimals, always in [0, 1].
pub fn blend(volume: f64, strength: f64) -> f64 {
    let raw = 0.5 * volume + 0.5 * strength;
    if raw.is_finite() {
        round2(raw).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn estimate_confidence(relative_delta: f64, impressions: f64) -> f64 {
    blend(volume_factor(impressions), delta_factor(relative_delta))
}

pub fn classify_impact(relative_delta: f64, thresholds: ImpactThresholds) -> Impact {
    if relative_delta >= thresholds.high {
        Impact::High
    } else if relative_delta >= thresholds.medium {
        Impact::Medium
    } else {
        Impact::Low
    }
}
