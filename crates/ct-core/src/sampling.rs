//! Inverse-CDF transforms for the exponential family.
//!
//! These are pure functions of a uniform variate so they can be checked
//! against hand-computed values; [`SimRng`](crate::SimRng) feeds them from
//! its stream.

use crate::tolerance::is_zero_rate;

/// Map `u ∈ [0, 1)` to an `Exp(rate)` draw: `−ln(1−u)/rate`.
///
/// A rate indistinguishable from zero never fires and yields `+∞`.
///
/// # Examples
///
/// ```
/// use ct_core::exponential_inverse_cdf;
///
/// assert_eq!(exponential_inverse_cdf(0.0, 2.0), 0.0);
/// assert!(exponential_inverse_cdf(0.5, 0.0).is_infinite());
/// ```
pub fn exponential_inverse_cdf(u: f64, rate: f64) -> f64 {
    if is_zero_rate(rate) {
        return f64::INFINITY;
    }
    -(-u).ln_1p() / rate
}

/// Map `u ∈ [0, 1)` to an `Exp(rate)` draw conditioned on landing in
/// `[0, bound]`: `−ln(1 − u·(1 − e^{−rate·bound}))/rate`.
///
/// A rate indistinguishable from zero forces the draw onto `bound`.  The
/// result is clamped into `[0, bound]` so rounding can never leave the
/// window.
///
/// # Examples
///
/// ```
/// use ct_core::truncated_exponential_inverse_cdf;
///
/// let x = truncated_exponential_inverse_cdf(0.999_999, 50.0, 1.0);
/// assert!(x <= 1.0);
/// assert_eq!(truncated_exponential_inverse_cdf(0.3, 0.0, 4.0), 4.0);
/// ```
pub fn truncated_exponential_inverse_cdf(u: f64, rate: f64, bound: f64) -> f64 {
    if is_zero_rate(rate) {
        return bound;
    }
    // 1 − e^{−rate·bound}, computed without cancellation for small products.
    let mass = -(-rate * bound).exp_m1();
    let draw = -(-u * mass).ln_1p() / rate;
    draw.clamp(0.0, bound.max(0.0))
}
