//! Core option and error types.
//!
//! This module provides:
//! - `option`: Option vocabulary (`OptionType`, `Position`)
//! - `error`: Structured error types for pricing and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`], [`Position`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

pub use error::PricingError;
pub use option::{OptionType, Position};
