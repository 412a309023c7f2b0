//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form pricing of European options and the calculations that sit
//! next to it.
//!
//! This crate provides:
//! - Black-Scholes price and Greeks (`analytical::black_scholes`)
//! - Boundary validation of pricing inputs
//! - Parallel Greeks ladders over a spot sweep (`analytical::ladder`)
//! - Payoff and profit diagrams (`instruments::payoff`)
//! - Explicit market assumptions supplied by callers (`params`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: The engine runs in `f32` or `f64`
//! - **Pure functions**: No state, no I/O, no logging in the engine
//! - **Validate at the boundary**: The raw engine is total; checked wrappers
//!   reject economically meaningless inputs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod params;
