//! Two-sample significance testing.
//!
//! Welch's unequal-variance t-test with a two-sided p-value from the
//! `statrs` Student t distribution. Non-finite sample values are omitted before any
//! moment is computed.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::StatsError;

/// Outcome of a Welch t-test of `a` against `b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WelchTest {
    pub mean_a: f64,
    pub mean_b: f64,
    /// `(mean_a - mean_b) / se`; infinite when both samples are constant
    /// and their means differ.
    pub t_statistic: f64,
    /// Welch–Satterthwaite degrees of freedom.
    pub degrees_of_freedom: f64,
    /// Two-sided.
    pub p_value: f64,
}

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased (n - 1) sample variance. Caller guarantees `len >= 2`.
pub fn sample_variance(values: &[f64], mean: f64) -> f64 {
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    ss / (values.len() - 1) as f64
}

pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTest, StatsError> {
    let a = finite(a);
    let b = finite(b);
    if a.len() < 2 || b.len() < 2 {
        return Err(StatsError::InsufficientSamples {
            left: a.len(),
            right: b.len(),
        });
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (mean_a, mean_b) = (mean(&a), mean(&b));
    let va = sample_variance(&a, mean_a) / na;
    let vb = sample_variance(&b, mean_b) / nb;
    let se = (va + vb).sqrt();
    let diff = mean_a - mean_b;

    if se == 0.0 {
        // Both samples constant.
        let (t_statistic, p_value) = if diff == 0.0 {
            (0.0, 1.0)
        } else {
            (diff.signum() * f64::INFINITY, 0.0)
        };
        return Ok(WelchTest {
            mean_a,
            mean_b,
            t_statistic,
            degrees_of_freedom: na + nb - 2.0,
            p_value,
        });
    }

    let t_statistic = diff / se;
    let df = (va + vb).powi(2) / (va.powi(2) / (na - 1.0) + vb.powi(2) / (nb - 1.0));
    let p_value = student_t_two_sided(t_statistic, df)?;

    Ok(WelchTest {
        mean_a,
        mean_b,
        t_statistic,
        degrees_of_freedom: df,
        p_value,
    })
}

/// `P(|T| >= |t|)` for a Student t with `df` degrees of freedom.
pub fn student_t_two_sided(t: f64, df: f64) -> Result<f64, StatsError> {
    if df.is_nan() || df <= 0.0 || t.is_nan() {
        return Err(StatsError::InvalidArgument(format!("t={t}, df={df}")));
    }
    if t.is_infinite() {
        return Ok(0.0);
    }
    let dist = StudentsT::new(0.0, 1.0, df)?;
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));
    Ok(p.clamp(0.0, 1.0))
}
