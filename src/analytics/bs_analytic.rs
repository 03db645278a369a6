// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x). Every formula in this
//! module takes the same five scalars:
//!
//! - `s`: current underlying price (> 0)
//! - `k`: strike price (> 0)
//! - `r`: continuously compounded risk-free rate
//! - `sigma`: annualized volatility (> 0)
//! - `t`: time to expiration in years (> 0)
//!
//! # Input handling
//!
//! These are straight-line formula evaluations; arguments are NOT
//! validated. Non-positive `s`, `k`, `sigma`, or `t` propagate as the
//! NaN/infinity the floating-point primitives naturally produce. Callers
//! that want checked inputs go through [`compute_all`].
//!
//! [`compute_all`]: crate::analytics::greeks_report::compute_all

use crate::math_utils::{norm_cdf, norm_pdf};

/// Selector for the two auxiliary terms of the Black-Scholes formulas
///
/// `D1` carries the `+σ²/2` drift correction, `D2` the `-σ²/2` one, so
/// `d(D2, ..) == d(D1, ..) - σ√T` holds for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DTerm {
    D1,
    D2,
}

/// Auxiliary quantity d₁/d₂ used throughout the Black-Scholes formulas
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = [ln(S/K) + (r - σ²/2)T] / (σ√T) = d₁ - σ√T
/// ```
///
/// Both variants are produced by this single expression; only the sign of
/// the variance correction differs. Keeping one body for the two terms is
/// what guarantees the `d₂ = d₁ - σ√T` identity.
pub fn d(term: DTerm, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let half_var = match term {
        DTerm::D1 => 0.5 * sigma * sigma,
        DTerm::D2 => -0.5 * sigma * sigma,
    };
    ((s / k).ln() + (r + half_var) * t) / (sigma * t.sqrt())
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d(DTerm::D1, s, k, r, sigma, t);
    let d2 = d(DTerm::D2, s, k, r, sigma, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Related to the call price through put-call parity.
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d(DTerm::D1, s, k, r, sigma, t);
    let d2 = d(DTerm::D2, s, k, r, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Black-Scholes Delta (∂V/∂S) for European call
///
/// # Formula
/// ```text
/// Δ_call = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d(DTerm::D1, s, k, r, sigma, t))
}

/// Black-Scholes Delta (∂V/∂S) for European put
///
/// # Formula
/// ```text
/// Δ_put = Φ(d₁) - 1
/// ```
///
/// Always one below the call delta with the same parameters, so it ranges
/// over [-1, 0].
pub fn bs_put_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d(DTerm::D1, s, k, r, sigma, t)) - 1.0
}

/// Black-Scholes Gamma (∂²V/∂S²) for European options
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Maximum at-the-money, decreases as option goes in/out-of-money
/// - Identical for calls and puts (a property of the model, not a
///   coincidence), hence the single body exported under both names
pub fn bs_call_gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_pdf(d(DTerm::D1, s, k, r, sigma, t)) / (s * sigma * t.sqrt())
}

/// Put gamma equals call gamma; same computation, second name.
pub use self::bs_call_gamma as bs_put_gamma;

/// Black-Scholes Vega (∂V/∂σ) for European options
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// # Interpretation
/// - Sensitivity to volatility changes
/// - Always positive for long options, maximum at-the-money
/// - Identical for calls and puts, hence the single body exported under
///   both names
pub fn bs_call_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    s * norm_pdf(d(DTerm::D1, s, k, r, sigma, t)) * t.sqrt()
}

/// Put vega equals call vega; same computation, second name.
pub use self::bs_call_vega as bs_put_vega;

/// Black-Scholes Theta (∂V/∂t) for European call
///
/// # Formula
/// ```text
/// Θ_call = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Interpretation
/// - Time decay of option value
/// - Usually negative for long options (time erodes value)
/// - Accelerates as expiration approaches
pub fn bs_call_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d(DTerm::D1, s, k, r, sigma, t);
    let d2 = d(DTerm::D2, s, k, r, sigma, t);
    (-s * norm_pdf(d1) * sigma) / (2.0 * t.sqrt()) - r * k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes Theta (∂V/∂t) for European put
///
/// # Formula
/// ```text
/// Θ_put = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
/// ```
pub fn bs_put_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = d(DTerm::D1, s, k, r, sigma, t);
    let d2 = d(DTerm::D2, s, k, r, sigma, t);
    (-s * norm_pdf(d1) * sigma) / (2.0 * t.sqrt()) + r * k * (-r * t).exp() * norm_cdf(-d2)
}

/// Black-Scholes Rho (∂V/∂r) for European call
///
/// # Formula
/// ```text
/// ρ_call = K * T * e^(-rT) * Φ(d₂)
/// ```
///
/// # Interpretation
/// - Sensitivity to interest rate changes
/// - Positive for calls (higher rates increase call value)
pub fn bs_call_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    k * t * (-r * t).exp() * norm_cdf(d(DTerm::D2, s, k, r, sigma, t))
}

/// Black-Scholes Rho (∂V/∂r) for European put
///
/// # Formula
/// ```text
/// ρ_put = -K * T * e^(-rT) * Φ(-d₂)
/// ```
///
/// Negative for puts: higher rates lower the present value of the strike.
pub fn bs_put_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    -k * t * (-r * t).exp() * norm_cdf(-d(DTerm::D2, s, k, r, sigma, t))
}
