//! Option vocabulary shared by the pricing engine and the payoff diagram.
//!
//! - `OptionType`: European call or put
//! - `Position`: Long or short holding of the contract

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Kind of European option.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionType;
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "put");
///
/// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    #[default]
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Exercise value at expiry.
    ///
    /// - Call: max(0, S - K)
    /// - Put: max(0, K - S)
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Lowercase name used for parsing and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Direction of the holding.
///
/// A short position mirrors the long one: its sensitivities carry the
/// opposite sign and its profit is `premium - payoff`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Position;
///
/// assert_eq!(Position::Long.sign::<f64>(), 1.0);
/// assert_eq!(Position::Short.sign::<f64>(), -1.0);
///
/// // Long call bought for 3.0, finishing 10.0 in the money
/// assert_eq!(Position::Long.profit(10.0_f64, 3.0), 7.0);
/// assert_eq!(Position::Short.profit(10.0_f64, 3.0), -7.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Bought the option, paid the premium
    #[default]
    Long,
    /// Sold the option, received the premium
    Short,
}

impl Position {
    /// `+1` for long, `-1` for short.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            Position::Long => T::one(),
            Position::Short => -T::one(),
        }
    }

    /// Profit at expiry given the option payoff and the premium.
    ///
    /// - Long: payoff - premium
    /// - Short: premium - payoff
    #[inline]
    pub fn profit<T: Float>(&self, payoff: T, premium: T) -> T {
        match self {
            Position::Long => payoff - premium,
            Position::Short => premium - payoff,
        }
    }

    /// Lowercase name used for parsing and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Long => "long",
            Position::Short => "short",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(Position::Long),
            "short" | "sell" => Ok(Position::Short),
            _ => Err(PricingError::UnknownPosition(s.to_string())),
        }
    }
}
