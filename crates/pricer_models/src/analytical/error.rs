//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Boundary validation failures for the Greeks engine,
//!   the payoff diagram and market assumptions

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// The engine itself is total; these errors come from the checked entry
/// points that validate inputs before pricing.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidExpiry`: Negative or non-finite time to expiration
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidPremium`: Non-finite premium in a payoff diagram
/// - `InvalidSweep`: Unusable spot sweep range
/// - `InvalidAssumptions`: Inconsistent market assumptions
/// - `NumericalInstability`: Valid inputs produced non-finite output
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive for Black-Scholes).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiration (negative).
    #[error("Invalid time to expiration: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry in years
        expiry: f64,
    },

    /// Invalid risk-free rate (non-finite).
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Invalid option premium (non-finite).
    #[error("Invalid premium: {premium}")]
    InvalidPremium {
        /// The invalid premium
        premium: f64,
    },

    /// Unusable spot sweep.
    #[error("Invalid spot sweep: {message}")]
    InvalidSweep {
        /// Description of the problem
        message: String,
    },

    /// Inconsistent market assumptions.
    #[error("Invalid market assumptions: {message}")]
    InvalidAssumptions {
        /// Description of the problem
        message: String,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid time to expiration: T = -0.5");
    }

    #[test]
    fn test_invalid_sweep_display() {
        let err = AnalyticalError::InvalidSweep {
            message: "step must be positive".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid spot sweep: step must be positive");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidRate { rate: f64::INFINITY };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_invalid_volatility_to_pricing_error() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.1 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => {
                assert!(msg.contains("volatility"));
            }
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_invalid_strike_to_pricing_error() {
        let err = AnalyticalError::InvalidStrike { strike: -5.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => {
                assert!(msg.contains("strike"));
            }
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "Overflow".to_string(),
        };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::NumericalInstability(msg) => {
                assert!(msg.contains("Overflow"));
            }
            _ => panic!("Expected NumericalInstability variant"),
        }
    }
}
