//! Market assumptions supplied by callers.
//!
//! The engine takes time to expiration and the risk-free rate as plain
//! arguments. Callers that work in days, or that want a house rate, keep
//! those choices here and pass them in explicitly.

use pricer_core::types::OptionType;

use crate::analytical::{AnalyticalError, PricingInput};

/// Day count and rate assumptions for building engine inputs.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::params::MarketAssumptions;
///
/// let market = MarketAssumptions::default();
/// assert_eq!(market.expiry_years(), 30.0 / 365.0);
///
/// let input = market.input(100.0, 100.0, 0.2, OptionType::Call);
/// assert_eq!(input.rate, 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketAssumptions {
    /// Calendar days until expiration
    pub days_to_expiry: f64,
    /// Days in a year for the year fraction
    pub days_per_year: f64,
    /// Continuously compounded risk-free rate (decimal)
    pub risk_free_rate: f64,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            days_to_expiry: 30.0,
            days_per_year: 365.0,
            risk_free_rate: 0.05,
        }
    }
}

impl MarketAssumptions {
    /// Creates new assumptions without validating them.
    pub fn new(days_to_expiry: f64, days_per_year: f64, risk_free_rate: f64) -> Self {
        Self {
            days_to_expiry,
            days_per_year,
            risk_free_rate,
        }
    }

    /// Time to expiration as a year fraction.
    #[inline]
    pub fn expiry_years(&self) -> f64 {
        self.days_to_expiry / self.days_per_year
    }

    /// Checks that the assumptions can produce a valid year fraction and rate.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidAssumptions` if `days_per_year <= 0`,
    /// `days_to_expiry < 0`, or any field is non-finite.
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(AnalyticalError::InvalidAssumptions {
                message: format!("days_per_year must be positive, got {}", self.days_per_year),
            });
        }
        if !(self.days_to_expiry.is_finite() && self.days_to_expiry >= 0.0) {
            return Err(AnalyticalError::InvalidAssumptions {
                message: format!(
                    "days_to_expiry must be non-negative, got {}",
                    self.days_to_expiry
                ),
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(AnalyticalError::InvalidAssumptions {
                message: format!("risk_free_rate must be finite, got {}", self.risk_free_rate),
            });
        }
        Ok(())
    }

    /// Builds an engine input with these assumptions filled in.
    pub fn input(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingInput<f64> {
        PricingInput::new(
            spot,
            strike,
            self.expiry_years(),
            self.risk_free_rate,
            volatility,
            option_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::calculate_greeks;

    #[test]
    fn test_defaults_match_reference_caller() {
        let market = MarketAssumptions::default();
        assert_eq!(market.days_to_expiry, 30.0);
        assert_eq!(market.days_per_year, 365.0);
        assert_eq!(market.risk_free_rate, 0.05);
        assert!(market.validate().is_ok());
    }

    #[test]
    fn test_input_feeds_engine() {
        let market = MarketAssumptions::new(90.0, 365.0, 0.02);
        let input = market.input(100.0, 95.0, 0.3, OptionType::Put);
        assert_eq!(
            input.greeks(),
            calculate_greeks(100.0, 95.0, 90.0 / 365.0, 0.02, 0.3, OptionType::Put)
        );
    }

    #[test]
    fn test_validate_rejects_bad_day_count() {
        assert!(MarketAssumptions::new(30.0, 0.0, 0.05).validate().is_err());
        assert!(MarketAssumptions::new(-1.0, 365.0, 0.05).validate().is_err());
        assert!(MarketAssumptions::new(30.0, 365.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_zero_days_is_valid() {
        let market = MarketAssumptions::new(0.0, 365.0, 0.05);
        assert!(market.validate().is_ok());
        assert_eq!(market.expiry_years(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_deserialisation_uses_defaults() {
        let market: MarketAssumptions = serde_json::from_str(r#"{"risk_free_rate": 0.01}"#).unwrap();
        assert_eq!(market.risk_free_rate, 0.01);
        assert_eq!(market.days_to_expiry, 30.0);
    }
}
