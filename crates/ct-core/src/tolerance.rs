//! Numerical zero tolerances.
//!
//! Quantities below these thresholds are treated as exactly zero and routed
//! to the closed-form special cases instead of being divided by.

/// Coalescence rates below this never fire.
pub const ZERO_RATE: f64 = 1e-11;

/// Times closer than this to a bound are snapped onto the bound.
pub const ZERO_TIME: f64 = 1e-7;

/// Effective population sizes below this take the model's degenerate closed form.
pub const ZERO_SIZE: f64 = 1e-11;

/// `true` if `rate` is numerically indistinguishable from zero.
#[inline]
pub fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < ZERO_RATE
}

/// `true` if `a` and `b` are within [`ZERO_TIME`] of each other.
#[inline]
pub fn times_coincide(a: f64, b: f64) -> bool {
    (a - b).abs() < ZERO_TIME
}
