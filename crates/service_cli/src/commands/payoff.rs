//! Payoff command implementation
//!
//! Prints payoff and profit at expiry over the spot sweep around the strike.
//! Without an explicit premium the option is priced with the engine first.

use clap::Args;
use pricer_models::analytical::price_checked;
use pricer_models::instruments::payoff_diagram;
use tracing::{debug, info, warn};

use super::{ContractArgs, MarketArgs};
use crate::config::CliConfig;
use crate::output::render_payoff;
use crate::{CliError, Result};

/// Arguments of `greeks payoff`
#[derive(Debug, Clone, Args)]
pub struct PayoffArgs {
    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Premium paid (long) or received (short)
    #[arg(long)]
    pub premium: Option<f64>,

    /// Spot price used to price the premium
    #[arg(short, long)]
    pub spot: Option<f64>,

    /// Volatility used to price the premium
    #[arg(long, visible_alias = "vol")]
    pub volatility: Option<f64>,

    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub market: MarketArgs,
}

fn resolve_premium(args: &PayoffArgs, config: &CliConfig) -> Result<f64> {
    if let Some(premium) = args.premium {
        return Ok(premium);
    }

    match (args.spot, args.volatility) {
        (Some(spot), Some(volatility)) => {
            let market = args.market.resolve(config)?;
            let input = market.input(spot, args.strike, volatility, args.contract.option_type);
            let premium = price_checked(&input)
                .inspect_err(|e| warn!("Premium pricing rejected: {}", e))?
                .price;
            debug!(premium, "Premium priced with the engine");
            Ok(premium)
        }
        _ => Err(CliError::InvalidArgument(
            "either --premium or both --spot and --volatility are required".to_string(),
        )),
    }
}

/// Builds the payoff diagram and renders it in the requested format.
pub fn render(args: &PayoffArgs, config: &CliConfig) -> Result<String> {
    let premium = resolve_premium(args, config)?;
    let points = payoff_diagram(
        args.contract.option_type,
        args.contract.position,
        args.strike,
        premium,
    )?;

    info!(
        "Payoff diagram for {} {} K={} premium={:.4}: {} points",
        args.contract.position,
        args.contract.option_type,
        args.strike,
        premium,
        points.len()
    );

    render_payoff(&points, args.contract.format(config))
}

/// Run the payoff command
pub fn run(args: &PayoffArgs, config: &CliConfig) -> Result<()> {
    print!("{}", render(args, config)?);
    Ok(())
}
