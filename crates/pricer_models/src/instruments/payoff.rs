//! Payoff and profit diagrams for European options.
//!
//! A diagram samples the expiry payoff `max(0, S - K)` (call) or
//! `max(0, K - S)` (put) on a grid of spot prices around the strike, and the
//! holder's profit after the premium:
//!
//! - Long: payoff - premium
//! - Short: premium - payoff
//!
//! The default grid runs from `max(0, K - 50)` to `K + 50` in steps of 2.

use num_traits::Float;
use pricer_core::types::{OptionType, Position};

use crate::analytical::AnalyticalError;

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// One sample of a payoff diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint<T> {
    /// Spot price at expiry
    pub spot: T,
    /// Option payoff at that spot
    pub payoff: T,
    /// Holder's profit after the premium
    pub profit: T,
}

/// Spot grid around a strike.
///
/// The grid covers `[max(0, K - half_width), K + half_width]` in increments
/// of `step`, both ends included when they fall on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRange<T> {
    /// Distance from the strike to either end of the grid
    pub half_width: T,
    /// Spacing between consecutive spots
    pub step: T,
}

impl<T: Float> Default for SweepRange<T> {
    fn default() -> Self {
        Self {
            half_width: T::from(50.0).unwrap(),
            step: T::from(2.0).unwrap(),
        }
    }
}

impl<T: Float> SweepRange<T> {
    /// Creates a sweep range without validating it.
    pub fn new(half_width: T, step: T) -> Self {
        Self { half_width, step }
    }
}

/// Builds the spot grid for `strike` and `range`.
///
/// Spots are generated as `start + i·step` rather than by accumulating the
/// step, so long grids do not drift.
///
/// # Errors
/// - `InvalidStrike` unless the strike is finite and > 0
/// - `InvalidSweep` if the half width is negative or non-finite, the step is
///   not positive and finite, or the grid exceeds [`MAX_SWEEP_POINTS`]
///
/// # Examples
/// ```
/// use pricer_models::instruments::{spot_sweep, SweepRange};
///
/// let spots = spot_sweep(100.0_f64, SweepRange::default()).unwrap();
/// assert_eq!(spots.len(), 51);
/// assert_eq!(spots[0], 50.0);
/// assert_eq!(spots[50], 150.0);
///
/// // The lower end never goes below zero
/// let spots = spot_sweep(20.0_f64, SweepRange::default()).unwrap();
/// assert_eq!(spots[0], 0.0);
/// ```
pub fn spot_sweep<T: Float>(strike: T, range: SweepRange<T>) -> Result<Vec<T>, AnalyticalError> {
    let zero = T::zero();

    if !(strike.is_finite() && strike > zero) {
        return Err(AnalyticalError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !(range.half_width.is_finite() && range.half_width >= zero) {
        return Err(AnalyticalError::InvalidSweep {
            message: "half width must be finite and non-negative".to_string(),
        });
    }
    if !(range.step.is_finite() && range.step > zero) {
        return Err(AnalyticalError::InvalidSweep {
            message: "step must be finite and positive".to_string(),
        });
    }

    let start = (strike - range.half_width).max(zero);
    let end = strike + range.half_width;

    let intervals = grid_intervals((end - start) / range.step)
        .to_usize()
        .ok_or_else(|| AnalyticalError::InvalidSweep {
            message: "grid size is not representable".to_string(),
        })?;
    if intervals >= MAX_SWEEP_POINTS {
        return Err(AnalyticalError::InvalidSweep {
            message: format!(
                "{} points exceeds the limit of {}",
                intervals.saturating_add(1),
                MAX_SWEEP_POINTS
            ),
        });
    }

    let mut spots = Vec::with_capacity(intervals + 1);
    for i in 0..=intervals {
        // usize -> Float is infallible for counts below MAX_SWEEP_POINTS
        let offset = T::from(i).unwrap_or_else(T::zero);
        spots.push(start + offset * range.step);
    }
    Ok(spots)
}

/// Whole number of steps in `quotient`.
///
/// A quotient within a few ulps of an integer snaps to it, so `K + half_width`
/// stays on the grid when `K - half_width` is not exactly representable.
fn grid_intervals<T: Float>(quotient: T) -> T {
    let nearest = quotient.round();
    let tolerance = nearest.max(T::one()) * T::epsilon() * T::from(64.0).unwrap();
    if (quotient - nearest).abs() <= tolerance {
        nearest
    } else {
        quotient.floor()
    }
}

/// Samples the payoff and profit on the default sweep.
///
/// # Arguments
/// * `option_type` - Call or put
/// * `position` - Long or short
/// * `strike` - Strike price (K)
/// * `premium` - Option premium paid (long) or received (short)
///
/// # Errors
/// Same as [`payoff_diagram_with_range`].
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, Position};
/// use pricer_models::instruments::payoff_diagram;
///
/// let diagram = payoff_diagram(OptionType::Call, Position::Long, 100.0_f64, 2.5).unwrap();
/// let last = diagram.last().unwrap();
/// assert_eq!(last.spot, 150.0);
/// assert_eq!(last.payoff, 50.0);
/// assert_eq!(last.profit, 47.5);
/// ```
pub fn payoff_diagram<T: Float>(
    option_type: OptionType,
    position: Position,
    strike: T,
    premium: T,
) -> Result<Vec<PayoffPoint<T>>, AnalyticalError> {
    payoff_diagram_with_range(option_type, position, strike, premium, SweepRange::default())
}

/// Samples the payoff and profit on a custom sweep.
///
/// # Errors
/// - `InvalidPremium` if the premium is non-finite
/// - Any error from [`spot_sweep`]
pub fn payoff_diagram_with_range<T: Float>(
    option_type: OptionType,
    position: Position,
    strike: T,
    premium: T,
    range: SweepRange<T>,
) -> Result<Vec<PayoffPoint<T>>, AnalyticalError> {
    if !premium.is_finite() {
        return Err(AnalyticalError::InvalidPremium {
            premium: premium.to_f64().unwrap_or(f64::NAN),
        });
    }

    let points = spot_sweep(strike, range)?
        .into_iter()
        .map(|spot| {
            let payoff = option_type.intrinsic(spot, strike);
            PayoffPoint {
                spot,
                payoff,
                profit: position.profit(payoff, premium),
            }
        })
        .collect();

    Ok(points)
}
