//! Trailing-window split shared by the generator rules and the evaluator
//! strategies.

use crate::summary::{DailyMetrics, MetricAggregate};

/// Days per comparison window.
pub const WINDOW_DAYS: usize = 7;

/// Minimum daily points before any windowed comparison runs.
pub const MIN_DAILY_POINTS: usize = 2 * WINDOW_DAYS;

/// The two most recent back-to-back windows of `daily`.
///
/// `prev` is `daily[-14..-7]`, `last` is `daily[-7..]`.
#[derive(Clone, Copy, Debug)]
pub struct WindowPair<'a> {
    pub prev: &'a [DailyMetrics],
    pub last: &'a [DailyMetrics],
}

impl<'a> WindowPair<'a> {
    /// Split `daily`, or `None` when fewer than [`MIN_DAILY_POINTS`] entries
    /// exist.
    pub fn split(daily: &'a [DailyMetrics]) -> Option<Self> {
        let n = daily.len();
        if n < MIN_DAILY_POINTS {
            return None;
        }
        Some(Self {
            prev: &daily[n - MIN_DAILY_POINTS..n - WINDOW_DAYS],
            last: &daily[n - WINDOW_DAYS..],
        })
    }

    /// Extract one field from each day of both windows.
    pub fn values(&self, field: impl Fn(&MetricAggregate) -> f64) -> (Vec<f64>, Vec<f64>) {
        let pick = |rows: &[DailyMetrics]| rows.iter().map(|d| field(&d.metrics)).collect();
        (pick(self.prev), pick(self.last))
    }

    /// Mean of one field over each window.
    pub fn means(&self, field: impl Fn(&MetricAggregate) -> f64) -> (f64, f64) {
        let (prev, last) = self.values(field);
        (finite_mean(&prev), finite_mean(&last))
    }

    /// Total impressions across both windows.
    pub fn impressions(&self) -> f64 {
        self.prev
            .iter()
            .chain(self.last.iter())
            .map(|d| d.metrics.impressions)
            .filter(|v| v.is_finite())
            .sum()
    }
}

/// Arithmetic mean of the finite values; `0.0` when there are none.
pub fn finite_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `(base - other) / base` when `base > 0`, else `0.0`.
pub fn relative_drop(base: f64, other: f64) -> f64 {
    if base > 0.0 {
        (base - other) / base
    } else {
        0.0
    }
}
