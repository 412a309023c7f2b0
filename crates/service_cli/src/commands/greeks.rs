//! Greeks command implementation
//!
//! Prices one contract and prints its value and sensitivities.

use clap::Args;
use pricer_models::analytical::price_checked;
use tracing::{debug, info, warn};

use super::{ContractArgs, MarketArgs};
use crate::config::CliConfig;
use crate::output::render_greeks;
use crate::Result;

/// Arguments of `greeks greeks`
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    /// Spot price of the underlying
    #[arg(short, long)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Annualised volatility as a decimal (e.g. 0.2)
    #[arg(long, visible_alias = "vol")]
    pub volatility: f64,

    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// Computes the Greeks and renders them in the requested format.
pub fn render(args: &GreeksArgs, config: &CliConfig) -> Result<String> {
    let market = args.market.resolve(config)?;
    let input = market.input(
        args.spot,
        args.strike,
        args.volatility,
        args.contract.option_type,
    );
    debug!(?input, "Engine input");

    let greeks = price_checked(&input)
        .inspect_err(|e| warn!("Pricing rejected: {}", e))?
        .with_position(args.contract.position);

    info!(
        "Priced {} {} K={} S={}: {:.4}",
        args.contract.position,
        args.contract.option_type,
        args.strike,
        args.spot,
        greeks.price
    );

    render_greeks(&greeks, args.contract.format(config))
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, config: &CliConfig) -> Result<()> {
    print!("{}", render(args, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::CliError;
    use approx::assert_relative_eq;
    use pricer_core::types::{OptionType, Position};
    use pricer_models::analytical::Greeks;

    fn args(position: Position) -> GreeksArgs {
        GreeksArgs {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.2,
            contract: ContractArgs {
                option_type: OptionType::Call,
                position,
                format: Some(OutputFormat::Json),
            },
            market: MarketArgs::default(),
        }
    }

    #[test]
    fn test_default_market_atm_call() {
        let out = render(&args(Position::Long), &CliConfig::default()).unwrap();
        let greeks: Greeks<f64> = serde_json::from_str(&out).unwrap();
        assert_relative_eq!(greeks.price, 2.49, epsilon = 0.005);
        assert_relative_eq!(greeks.delta, 0.54, epsilon = 0.005);
    }

    #[test]
    fn test_short_flips_sensitivities_only() {
        let config = CliConfig::default();
        let long: Greeks<f64> =
            serde_json::from_str(&render(&args(Position::Long), &config).unwrap()).unwrap();
        let short: Greeks<f64> =
            serde_json::from_str(&render(&args(Position::Short), &config).unwrap()).unwrap();
        assert_eq!(short.price, long.price);
        assert_eq!(short.delta, -long.delta);
        assert_eq!(short.theta, -long.theta);
    }

    #[test]
    fn test_invalid_volatility_is_reported() {
        let mut bad = args(Position::Long);
        bad.volatility = 0.0;
        let err = render(&bad, &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().contains("volatility"));
    }
}
