//! Mathematical primitives.
//!
//! - `distributions`: Standard normal CDF and PDF approximations

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
