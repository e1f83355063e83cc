//! Wilson score interval for a binomial proportion.
//!
//! Unlike the normal approximation, the Wilson interval stays inside [0, 1]
//! and keeps sensible coverage when the proportion is at or near 0 or 1.

use statrs::distribution::{ContinuousCDF, Normal};
use stride_core::types::ConfidenceInterval;

/// Two-sided critical value for `confidence_level` (1.959964 at 0.95).
///
/// `None` unless the level is strictly between 0 and 1.
pub fn z_score(confidence_level: f64) -> Option<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return None;
    }
    let standard = Normal::new(0.0, 1.0).ok()?;
    let z = standard.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
    z.is_finite().then_some(z)
}

/// Wilson score interval for `successes` out of `trials` at critical value `z`.
///
/// The bounds are clamped to [0, 1] and to either side of the point estimate,
/// so `lower <= successes / trials <= upper` holds even under rounding.
/// `None` for zero trials.
pub fn wilson_interval(successes: u64, trials: u64, z: f64) -> Option<ConfidenceInterval> {
    if trials == 0 || successes > trials {
        return None;
    }
    let n = trials as f64;
    let p = successes as f64 / n;
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = (p + z2 / (2.0 * n)) / denom;
    let half_width = (z / denom) * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();

    Some(ConfidenceInterval {
        lower: (center - half_width).clamp(0.0, p),
        upper: (center + half_width).clamp(p, 1.0),
    })
}
