// src/math_utils.rs
//! Standard normal distribution primitives
//!
//! Every Greek formula in this crate reduces to a handful of arithmetic
//! operations plus calls to these two functions. Both are total over the
//! reals: extreme arguments saturate to 0.0/1.0 rather than raising.

use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution function
///
/// # Formula
/// ```text
/// Φ(x) = 0.5 * erfc(-x / √2)
/// ```
///
/// The complementary-error-function form keeps full relative precision in
/// the lower tail, where `0.5 * (1 + erf(x/√2))` cancels catastrophically.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}
