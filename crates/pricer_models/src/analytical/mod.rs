//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes price for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho) in desk units
//! - Greeks ladders evaluated in parallel across spot levels
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Fixed CDF approximation**: Uses the Zelen & Severo polynomial from
//!   `pricer_core`, so results are reproducible bit-for-bit
//! - **Total engine**: `calculate_greeks` never fails; `price_checked`
//!   validates first

pub mod black_scholes;
pub mod error;
pub mod ladder;

// Re-export main types at module level
pub use black_scholes::{
    calculate_greeks, price_checked, BlackScholes, Greeks, PricingInput, DAYS_PER_YEAR,
    EXPIRY_EPSILON, PERCENTAGE_POINT,
};
pub use error::AnalyticalError;
pub use ladder::{greeks_ladder, LadderPoint};
