//! Expiry payoff of European options.
//!
//! - `payoff`: Payoff and profit diagrams over a spot sweep

pub mod payoff;

pub use payoff::{
    payoff_diagram, payoff_diagram_with_range, spot_sweep, PayoffPoint, SweepRange,
    MAX_SWEEP_POINTS,
};
