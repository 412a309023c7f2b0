//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations and vocabulary parsing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or contract parameters
/// - `NumericalInstability`: Computation produced non-finite output
/// - `UnknownOptionType`: Option type string not recognised
/// - `UnknownPosition`: Position string not recognised
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Option type string not recognised
    #[error("Unknown option type: {0} (expected call or put)")]
    UnknownOptionType(String),

    /// Position string not recognised
    #[error("Unknown position: {0} (expected long or short)")]
    UnknownPosition(String),
}
