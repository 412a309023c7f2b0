//! Standard normal distribution functions.
//!
//! This module provides closed-form approximations of:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF uses the Zelen & Severo rational polynomial (Abramowitz and Stegun
//! formula 26.2.17), accurate to roughly 7.5e-8 over the real line. Pricing
//! output depends on these exact coefficients, so they must not be retuned.
//!
//! All functions are generic over `T: Float` so they can be evaluated in
//! `f32` or `f64`.

use num_traits::Float;

/// Scale factor of the `t` substitution.
const P: f64 = 0.2316419;

/// Truncated 1 / sqrt(2π) used by the CDF polynomial.
const CDF_DENSITY_SCALE: f64 = 0.3989423;

// Zelen & Severo polynomial coefficients (26.2.17)
const B1: f64 = 0.3193815;
const B2: f64 = -0.3565638;
const B3: f64 = 1.7814779;
const B4: f64 = -1.821256;
const B5: f64 = 1.3302745;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Algorithm
/// ```text
/// t = 1 / (1 + 0.2316419·|x|)
/// d = 0.3989423 · exp(-x²/2)
/// p = d·t·(b1 + t·(b2 + t·(b3 + t·(b4 + t·b5))))
/// Φ(x) = 1 - p   if x > 0
///        p       otherwise
/// ```
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in range [0, 1]. Large `|x|` saturates to
/// exactly 0 or 1 once `exp(-x²/2)` underflows.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite `x`. Because `x = 0` takes the
/// `p` branch, `Φ(0)` evaluates to `0.50000001` rather than exactly `0.5`.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap();

    let t = one / (one + T::from(P).unwrap() * x.abs());
    let d = T::from(CDF_DENSITY_SCALE).unwrap() * (-half * x * x).exp();

    // Horner's method for the polynomial in t
    let poly = T::from(B1).unwrap()
        + t * (T::from(B2).unwrap()
            + t * (T::from(B3).unwrap() + t * (T::from(B4).unwrap() + t * T::from(B5).unwrap())));
    let p = d * t * poly;

    if x > T::zero() {
        one - p
    } else {
        p
    }
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = exp(-x² / 2) / sqrt(2π). This is the exact
/// closed form, not an approximation.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let two_pi = T::from(std::f64::consts::TAU).unwrap();
    let half = T::from(0.5).unwrap();

    (-half * x * x).exp() / two_pi.sqrt()
}
