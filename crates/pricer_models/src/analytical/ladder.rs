//! Greeks ladders across spot levels.
//!
//! Evaluates [`calculate_greeks`] at every spot of a sweep. The engine is
//! pure, so the points are computed in parallel with Rayon without any
//! synchronisation and the output is identical to a sequential loop.

use num_traits::Float;
use pricer_core::types::OptionType;
use rayon::prelude::*;

use super::black_scholes::{calculate_greeks, Greeks};

/// Greeks evaluated at one spot level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPoint<T> {
    /// Spot price of the underlying
    pub spot: T,
    /// Price and sensitivities at that spot
    pub greeks: Greeks<T>,
}

/// Computes Greeks for each spot in `spots`, in parallel.
///
/// Output order matches input order. Inputs are not validated; use
/// [`spot_sweep`](crate::instruments::spot_sweep) to build a positive sweep.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::greeks_ladder;
///
/// let spots = [90.0_f64, 100.0, 110.0];
/// let ladder = greeks_ladder(&spots, 100.0, 0.25, 0.05, 0.2, OptionType::Call);
/// assert_eq!(ladder.len(), 3);
/// assert!(ladder[0].greeks.delta < ladder[2].greeks.delta);
/// ```
pub fn greeks_ladder<T>(
    spots: &[T],
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> Vec<LadderPoint<T>>
where
    T: Float + Send + Sync,
{
    spots
        .par_iter()
        .map(|&spot| LadderPoint {
            spot,
            greeks: calculate_greeks(spot, strike, expiry, rate, volatility, option_type),
        })
        .collect()
}
