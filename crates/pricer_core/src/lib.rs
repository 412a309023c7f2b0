//! # pricer_core: Numerical Foundation for the Greeks Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal CDF/PDF approximations (`math::distributions`)
//! - Option vocabulary: `OptionType`, `Position` (`types::option`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::types::{OptionType, Position};
//!
//! let cdf = norm_cdf(1.0_f64);
//! assert!((cdf - 0.8413447).abs() < 1e-6);
//!
//! let pdf = norm_pdf(0.0_f64);
//! assert!((pdf - 0.3989423).abs() < 1e-6);
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert_eq!(call, OptionType::Call);
//! assert_eq!(Position::Short.sign::<f64>(), -1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType` and `Position`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

/// Generic floating-point trait used throughout the pricer crates.
pub use num_traits::Float;
