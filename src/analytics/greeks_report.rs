// src/analytics/greeks_report.rs
//! Validated compute-all layer over the raw Black-Scholes formulas
//!
//! The formula functions in [`bs_analytic`] are deliberately permissive;
//! this module is the checked front door. [`compute_all`] validates the
//! market inputs once, then evaluates price and all five Greeks for both
//! the call and the put side.
//!
//! [`bs_analytic`]: crate::analytics::bs_analytic

use crate::analytics::bs_analytic::{
    bs_call_delta, bs_call_gamma, bs_call_price, bs_call_rho, bs_call_theta, bs_call_vega,
    bs_put_delta, bs_put_gamma, bs_put_price, bs_put_rho, bs_put_theta, bs_put_vega,
};
use crate::error::{validation::*, GreeksResult};
use std::fmt;

/// Market scenario for a single European option quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionInputs {
    pub s: f64,
    pub k: f64,
    pub r: f64,
    pub sigma: f64,
    pub t: f64,
}

impl OptionInputs {
    /// Validate the market inputs
    pub fn validate(&self) -> GreeksResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("t", self.t)?;

        Ok(())
    }
}

impl Default for OptionInputs {
    fn default() -> Self {
        OptionInputs {
            s: 100.0,
            k: 100.0,
            r: 0.05,
            sigma: 0.2,
            t: 1.0,
        }
    }
}

/// Price and sensitivities for one side of the book
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreekSet {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Full call/put sensitivity report for one market scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreeksReport {
    pub inputs: OptionInputs,
    pub call: GreekSet,
    pub put: GreekSet,
}

/// Evaluate price and all five Greeks for both call and put
///
/// Validates the inputs first; the formula evaluations themselves cannot
/// fail once the inputs are in range.
///
/// # Errors
///
/// Returns `GreeksError::InvalidParameters` when `s`, `k`, `sigma`, or `t`
/// is not positive, or `r` is not finite.
pub fn compute_all(inputs: &OptionInputs) -> GreeksResult<GreeksReport> {
    inputs.validate()?;

    let OptionInputs { s, k, r, sigma, t } = *inputs;

    let call = GreekSet {
        price: bs_call_price(s, k, r, sigma, t),
        delta: bs_call_delta(s, k, r, sigma, t),
        gamma: bs_call_gamma(s, k, r, sigma, t),
        vega: bs_call_vega(s, k, r, sigma, t),
        theta: bs_call_theta(s, k, r, sigma, t),
        rho: bs_call_rho(s, k, r, sigma, t),
    };

    let put = GreekSet {
        price: bs_put_price(s, k, r, sigma, t),
        delta: bs_put_delta(s, k, r, sigma, t),
        gamma: bs_put_gamma(s, k, r, sigma, t),
        vega: bs_put_vega(s, k, r, sigma, t),
        theta: bs_put_theta(s, k, r, sigma, t),
        rho: bs_put_rho(s, k, r, sigma, t),
    };

    Ok(GreeksReport {
        inputs: *inputs,
        call,
        put,
    })
}

impl fmt::Display for GreekSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Delta: {}", self.delta)?;
        writeln!(f, "Gamma: {}", self.gamma)?;
        writeln!(f, "Vega: {}", self.vega)?;
        writeln!(f, "Theta: {}", self.theta)?;
        write!(f, "Rho: {}", self.rho)
    }
}

impl fmt::Display for GreeksReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Underlying: {}", self.inputs.s)?;
        writeln!(f, "Strike: {}", self.inputs.k)?;
        writeln!(f, "Risk-Free Rate: {}", self.inputs.r)?;
        writeln!(f, "Volatility: {}", self.inputs.sigma)?;
        writeln!(f, "Maturity: {}", self.inputs.t)?;
        writeln!(f)?;
        writeln!(f, "--- CALL ---")?;
        writeln!(f, "{}", self.call)?;
        writeln!(f)?;
        writeln!(f, "--- PUT ---")?;
        write!(f, "{}", self.put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        assert!(OptionInputs::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_bad_parameter() {
        let bad = [
            OptionInputs {
                s: 0.0,
                ..Default::default()
            },
            OptionInputs {
                k: -100.0,
                ..Default::default()
            },
            OptionInputs {
                r: f64::NAN,
                ..Default::default()
            },
            OptionInputs {
                sigma: 0.0,
                ..Default::default()
            },
            OptionInputs {
                t: -1.0,
                ..Default::default()
            },
        ];

        for inputs in bad {
            assert!(
                compute_all(&inputs).is_err(),
                "expected rejection for {:?}",
                inputs
            );
        }
    }

    #[test]
    fn test_report_layout() {
        let report = compute_all(&OptionInputs::default()).expect("Valid default scenario");
        let text = format!("{}", report);

        assert!(text.starts_with("Underlying: 100"));
        assert!(text.contains("--- CALL ---"));
        assert!(text.contains("--- PUT ---"));
        assert_eq!(text.matches("Delta:").count(), 2);
        assert_eq!(text.matches("Rho:").count(), 2);
    }
}
