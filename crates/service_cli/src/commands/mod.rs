//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::Args;
use pricer_core::types::{OptionType, Position};
use pricer_models::params::MarketAssumptions;
use tracing::warn;

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::{CliError, Result};

pub mod check;
pub mod greeks;
pub mod ladder;
pub mod payoff;

/// Market assumption overrides shared by the pricing commands
#[derive(Debug, Clone, Default, Args)]
pub struct MarketArgs {
    /// Calendar days to expiration
    #[arg(short, long)]
    pub days: Option<f64>,

    /// Risk-free rate as a decimal (e.g. 0.05)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Days per year used for the year fraction
    #[arg(long)]
    pub days_per_year: Option<f64>,
}

impl MarketArgs {
    /// Applies the overrides on top of the configured assumptions.
    pub fn resolve(&self, config: &CliConfig) -> Result<MarketAssumptions> {
        let mut market = config.market;
        if let Some(days) = self.days {
            market.days_to_expiry = days;
        }
        if let Some(rate) = self.rate {
            market.risk_free_rate = rate;
        }
        if let Some(basis) = self.days_per_year {
            market.days_per_year = basis;
        }
        market.validate().map_err(|e| {
            warn!("Rejected market assumptions: {}", e);
            CliError::from(e)
        })?;
        Ok(market)
    }
}

/// Contract flags shared by the pricing commands
#[derive(Debug, Clone, Default, Args)]
pub struct ContractArgs {
    /// Option type (call or put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Holder position (long or short)
    #[arg(short, long, default_value = "long")]
    pub position: Position,

    /// Output format (table, json, csv); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl ContractArgs {
    /// Output format after falling back to the configuration.
    pub fn format(&self, config: &CliConfig) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }
}
