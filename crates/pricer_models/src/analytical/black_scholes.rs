//! Black-Scholes pricing and Greeks for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton price of
//! European calls and puts together with their five sensitivities.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·(1 - N(d₂)) - S·(1 - N(d₁))
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Units
//!
//! | Field   | Convention                                   |
//! |---------|----------------------------------------------|
//! | `price` | currency units, unscaled                     |
//! | `delta` | ∂V/∂S, unscaled                              |
//! | `gamma` | ∂²V/∂S², unscaled                            |
//! | `theta` | ∂V/∂t per calendar day (annual / 365)        |
//! | `vega`  | per one volatility point (∂V/∂σ / 100)       |
//! | `rho`   | per one rate point (∂V/∂r / 100)             |
//!
//! ## Expiry Clamp
//!
//! `T <= 0` is replaced by [`EXPIRY_EPSILON`] (1e-6 years) before any
//! division by √T. The result at expiry is therefore the value of an option
//! with about 32 seconds left, not the exact boundary value: an at-the-money
//! call returns a price of about 0.008 and a gamma of about 19.9 rather than
//! 0 and a Dirac spike.

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionType, Position};

use super::error::AnalyticalError;

/// Time to expiration substituted for `T <= 0`, in years.
pub const EXPIRY_EPSILON: f64 = 1e-6;

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Divisor expressing vega and rho per one percentage point.
pub const PERCENTAGE_POINT: f64 = 100.0;

#[inline]
fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Price and sensitivities of a single European option.
///
/// Produced fresh by every call to [`calculate_greeks`]; see the module
/// documentation for the unit of each field.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::calculate_greeks;
///
/// let greeks = calculate_greeks(100.0_f64, 100.0, 30.0 / 365.0, 0.05, 0.2, OptionType::Call);
/// assert!((greeks.price - 2.49).abs() < 0.005);
/// assert!((greeks.delta - 0.54).abs() < 0.005);
/// assert!(greeks.theta < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// Theoretical option value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// Time decay per calendar day
    pub theta: T,
    /// Sensitivity per one volatility point
    pub vega: T,
    /// Sensitivity per one rate point
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Undoes the unit normalisation, returning the raw partial derivatives.
    ///
    /// `theta · 365`, `vega · 100`, `rho · 100`; price, delta and gamma are
    /// unchanged.
    pub fn annualised(&self) -> Self {
        let days = T::from(DAYS_PER_YEAR).unwrap();
        let point = T::from(PERCENTAGE_POINT).unwrap();
        Self {
            theta: self.theta * days,
            vega: self.vega * point,
            rho: self.rho * point,
            ..*self
        }
    }

    /// Applies the holder's sign to the five sensitivities.
    ///
    /// Delta, gamma, theta, vega and rho are multiplied by `position.sign()`.
    /// `price` is deliberately left as the option's value: what a short
    /// position earns or owes at expiry is `premium - payoff`, which the
    /// payoff diagram computes separately.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionType, Position};
    /// use pricer_models::analytical::calculate_greeks;
    ///
    /// let long = calculate_greeks(100.0_f64, 100.0, 0.25, 0.05, 0.2, OptionType::Put);
    /// let short = long.with_position(Position::Short);
    /// assert_eq!(short.delta, -long.delta);
    /// assert_eq!(short.price, long.price);
    /// ```
    pub fn with_position(&self, position: Position) -> Self {
        let sign = position.sign::<T>();
        Self {
            price: self.price,
            delta: self.delta * sign,
            gamma: self.gamma * sign,
            theta: self.theta * sign,
            vega: self.vega * sign,
            rho: self.rho * sign,
        }
    }

    /// Returns true if every field is finite.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite()
            && self.delta.is_finite()
            && self.gamma.is_finite()
            && self.theta.is_finite()
            && self.vega.is_finite()
            && self.rho.is_finite()
    }
}

/// Computes the Black-Scholes price and Greeks of a European option.
///
/// # Arguments
/// * `spot` - Current price of the underlying (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiration in years (T); `T <= 0` is clamped to
///   [`EXPIRY_EPSILON`]
/// * `rate` - Continuously compounded risk-free rate (r), may be zero or
///   negative
/// * `volatility` - Annualised volatility (σ)
/// * `option_type` - Call or put
///
/// # Returns
/// A fresh [`Greeks`] record. The function is total: non-positive spot or
/// volatility and negative strike yield NaN or infinite fields rather than an
/// error. A strike of exactly zero saturates `d₁ = d₂ = +∞` and gives the
/// finite result `price = S`, `delta = 1`. Use
/// [`price_checked`] to reject such inputs.
#[inline]
pub fn calculate_greeks<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> Greeks<T> {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let expiry = clamp_expiry(expiry);

    let sqrt_t = expiry.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;

    let d1 = ((spot / strike).ln() + (rate + volatility * volatility / two) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let n_d1 = norm_cdf(d1);
    let n_d2 = norm_cdf(d2);
    let n_prime_d1 = norm_pdf(d1);

    let discount = (-rate * expiry).exp();

    // Common theta term: -(S·φ(d₁)·σ)/(2√T)
    let decay = -(spot * n_prime_d1 * volatility) / (two * sqrt_t);

    let (price, delta, theta, rho) = match option_type {
        OptionType::Call => (
            spot * n_d1 - strike * discount * n_d2,
            n_d1,
            decay - rate * strike * discount * n_d2,
            strike * expiry * discount * n_d2,
        ),
        OptionType::Put => {
            // Φ(-x) = 1 - Φ(x), taken from the same CDF evaluation
            let n_minus_d1 = one - n_d1;
            let n_minus_d2 = one - n_d2;
            (
                strike * discount * n_minus_d2 - spot * n_minus_d1,
                n_d1 - one,
                decay + rate * strike * discount * n_minus_d2,
                -strike * expiry * discount * n_minus_d2,
            )
        }
    };

    let gamma = n_prime_d1 / (spot * volatility * sqrt_t);
    let vega = spot * sqrt_t * n_prime_d1;

    Greeks {
        price,
        delta,
        gamma,
        theta: theta / T::from(DAYS_PER_YEAR).unwrap(),
        vega: vega / T::from(PERCENTAGE_POINT).unwrap(),
        rho: rho / T::from(PERCENTAGE_POINT).unwrap(),
    }
}

/// The six inputs of the Greeks engine.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::PricingInput;
///
/// let input = PricingInput::new(100.0_f64, 105.0, 0.5, 0.03, 0.25, OptionType::Put);
/// assert!(input.validate().is_ok());
///
/// let bad = PricingInput { volatility: 0.0, ..input };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInput<T> {
    /// Spot price (S)
    pub spot: T,
    /// Strike price (K)
    pub strike: T,
    /// Time to expiration in years (T)
    pub expiry: T,
    /// Risk-free rate (r)
    pub rate: T,
    /// Volatility (σ)
    pub volatility: T,
    /// Call or put
    pub option_type: OptionType,
}

impl<T: Float> PricingInput<T> {
    /// Creates a new pricing input without validating it.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Checks that the inputs are economically meaningful.
    ///
    /// # Errors
    /// - `InvalidSpot` unless spot is finite and > 0
    /// - `InvalidStrike` unless strike is finite and > 0
    /// - `InvalidVolatility` unless volatility is finite and > 0
    /// - `InvalidExpiry` unless expiry is finite and >= 0 (zero is priced
    ///   through the [`EXPIRY_EPSILON`] clamp)
    /// - `InvalidRate` unless rate is finite
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let zero = T::zero();

        if !(self.spot.is_finite() && self.spot > zero) {
            return Err(AnalyticalError::InvalidSpot {
                spot: as_f64(self.spot),
            });
        }
        if !(self.strike.is_finite() && self.strike > zero) {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(self.strike),
            });
        }
        if !(self.volatility.is_finite() && self.volatility > zero) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(self.volatility),
            });
        }
        if !(self.expiry.is_finite() && self.expiry >= zero) {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(self.expiry),
            });
        }
        if !self.rate.is_finite() {
            return Err(AnalyticalError::InvalidRate {
                rate: as_f64(self.rate),
            });
        }

        Ok(())
    }

    /// Evaluates [`calculate_greeks`] on these inputs without validation.
    #[inline]
    pub fn greeks(&self) -> Greeks<T> {
        calculate_greeks(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }
}

/// Validates the input, then prices it.
///
/// For valid inputs the result is bit-identical to [`calculate_greeks`].
///
/// # Errors
/// - Any error from [`PricingInput::validate`]
/// - `AnalyticalError::NumericalInstability` if valid inputs still produce
///   a non-finite field (for example through overflow)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::{price_checked, AnalyticalError, PricingInput};
///
/// let input = PricingInput::new(-1.0_f64, 100.0, 0.5, 0.05, 0.2, OptionType::Call);
/// assert_eq!(
///     price_checked(&input).unwrap_err(),
///     AnalyticalError::InvalidSpot { spot: -1.0 }
/// );
/// ```
pub fn price_checked<T: Float>(input: &PricingInput<T>) -> Result<Greeks<T>, AnalyticalError> {
    input.validate()?;

    let greeks = input.greeks();
    if !greeks.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: format!(
                "non-finite Greeks for S = {}, K = {}, T = {}",
                as_f64(input.spot),
                as_f64(input.strike),
                as_f64(input.expiry)
            ),
        });
    }

    Ok(greeks)
}

/// Black-Scholes market state for European option pricing.
///
/// Holds one validated spot, rate and volatility so that several contracts
/// can be priced against the same market.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes market state.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or non-finite
    /// - `AnalyticalError::InvalidRate` if rate is non-finite
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot.is_finite() && spot > zero) {
            return Err(AnalyticalError::InvalidSpot { spot: as_f64(spot) });
        }
        if !(volatility.is_finite() && volatility > zero) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: as_f64(rate) });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes d₁ with the same expiry clamp as the engine.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let two = T::from(2.0).unwrap();
        let expiry = clamp_expiry(expiry);
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        ((self.spot / strike).ln() + (self.rate + self.volatility * self.volatility / two) * expiry)
            / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√T with the same expiry clamp as the engine.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * clamp_expiry(expiry).sqrt()
    }

    /// Builds the engine input for a contract priced against this market.
    pub fn input(&self, strike: T, expiry: T, option_type: OptionType) -> PricingInput<T> {
        PricingInput::new(
            self.spot,
            strike,
            expiry,
            self.rate,
            self.volatility,
            option_type,
        )
    }

    /// Computes price and Greeks for one contract.
    ///
    /// # Errors
    /// - `InvalidStrike` / `InvalidExpiry` from [`PricingInput::validate`]
    pub fn greeks(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<Greeks<T>, AnalyticalError> {
        price_checked(&self.input(strike, expiry, option_type))
    }

    /// Computes the option price for one contract.
    ///
    /// # Errors
    /// Same as [`BlackScholes::greeks`].
    pub fn price(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<T, AnalyticalError> {
        self.greeks(strike, expiry, option_type).map(|g| g.price)
    }
}

#[inline]
fn clamp_expiry<T: Float>(expiry: T) -> T {
    if expiry <= T::zero() {
        T::from(EXPIRY_EPSILON).unwrap()
    } else {
        expiry
    }
}
