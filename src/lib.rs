//! # bs-greeks: Closed-Form Black-Scholes Prices and Greeks
//!
//! A Rust library for the analytical Black-Scholes valuation of European
//! options: prices plus the five first-order sensitivities (delta, gamma,
//! vega, theta, rho) for both calls and puts.
//!
//! ## Key Features
//!
//! - **Closed Form**: Every quantity is a direct formula evaluation; no
//!   simulation, no iteration, no hidden state
//! - **Complete Greeks**: Delta, Gamma, Vega, Theta, Rho for calls and puts,
//!   with the call/put gamma and vega identities expressed structurally
//! - **Accurate Numerics**: Normal CDF via the complementary error function,
//!   accurate over the whole practical domain
//! - **Checked Entry Point**: A validated compute-all layer that evaluates
//!   the full call/put report from one input struct
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::analytics::bs_analytic::{bs_call_delta, bs_call_gamma};
//!
//! // At-the-money call, 1 year to expiry
//! let delta = bs_call_delta(100.0, 100.0, 0.05, 0.2, 1.0);
//! let gamma = bs_call_gamma(100.0, 100.0, 0.05, 0.2, 1.0);
//!
//! assert!(delta > 0.5 && delta < 1.0);
//! assert!(gamma > 0.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Under the Black-Scholes model the underlying follows geometric Brownian
//! motion and European option values have closed-form solutions involving
//! the standard normal CDF Φ(x). The Greeks are the partial derivatives of
//! those solutions with respect to the market parameters.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;

// Re-export commonly used types for convenience
pub use error::{GreeksError, GreeksResult};
