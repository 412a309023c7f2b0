//! Ladder command implementation
//!
//! Evaluates the Greeks at every spot of the sweep around the strike.

use clap::Args;
use pricer_models::analytical::{greeks_ladder, LadderPoint, PricingInput};
use pricer_models::instruments::{spot_sweep, SweepRange};
use tracing::{debug, info, warn};

use super::{ContractArgs, MarketArgs};
use crate::config::CliConfig;
use crate::output::render_ladder;
use crate::Result;

/// Arguments of `greeks ladder`
#[derive(Debug, Clone, Args)]
pub struct LadderArgs {
    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Annualised volatility as a decimal (e.g. 0.2)
    #[arg(long, visible_alias = "vol")]
    pub volatility: f64,

    /// Distance from the strike to either end of the sweep
    #[arg(long, default_value_t = 50.0)]
    pub half_width: f64,

    /// Spacing between consecutive spots
    #[arg(long, default_value_t = 2.0)]
    pub step: f64,

    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// Builds the ladder and renders it in the requested format.
pub fn render(args: &LadderArgs, config: &CliConfig) -> Result<String> {
    let market = args.market.resolve(config)?;
    // ATM input carries the contract fields through boundary validation
    let input: PricingInput<f64> =
        market.input(args.strike, args.strike, args.volatility, args.contract.option_type);
    input
        .validate()
        .inspect_err(|e| warn!("Ladder rejected: {}", e))?;

    let range = SweepRange::new(args.half_width, args.step);
    // Zero spot is on the grid for low strikes but outside the engine's domain
    let spots: Vec<f64> = spot_sweep(args.strike, range)?
        .into_iter()
        .filter(|&s| s > 0.0)
        .collect();
    debug!(points = spots.len(), "Spot sweep built");

    let position = args.contract.position;
    let ladder: Vec<LadderPoint<f64>> = greeks_ladder(
        &spots,
        input.strike,
        input.expiry,
        input.rate,
        input.volatility,
        input.option_type,
    )
    .into_iter()
    .map(|point| LadderPoint {
        spot: point.spot,
        greeks: point.greeks.with_position(position),
    })
    .collect();

    info!(
        "Greeks ladder for {} {} K={}: {} points",
        position,
        input.option_type,
        args.strike,
        ladder.len()
    );

    render_ladder(&ladder, args.contract.format(config))
}

/// Run the ladder command
pub fn run(args: &LadderArgs, config: &CliConfig) -> Result<()> {
    print!("{}", render(args, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::CliError;
    use pricer_core::types::{OptionType, Position};

    fn args(strike: f64) -> LadderArgs {
        LadderArgs {
            strike,
            volatility: 0.2,
            half_width: 50.0,
            step: 2.0,
            contract: ContractArgs {
                option_type: OptionType::Call,
                position: Position::Long,
                format: Some(OutputFormat::Json),
            },
            market: MarketArgs::default(),
        }
    }

    fn parse(out: &str) -> Vec<LadderPoint<f64>> {
        serde_json::from_str(out).unwrap()
    }

    #[test]
    fn test_default_sweep() {
        let ladder = parse(&render(&args(100.0), &CliConfig::default()).unwrap());
        assert_eq!(ladder.len(), 51);
        assert_eq!(ladder[0].spot, 50.0);
        assert_eq!(ladder[50].spot, 150.0);
        assert!(ladder[0].greeks.delta < ladder[50].greeks.delta);
    }

    #[test]
    fn test_zero_spot_skipped() {
        // Sweep for K=20 starts at 0
        let ladder = parse(&render(&args(20.0), &CliConfig::default()).unwrap());
        assert_eq!(ladder.len(), 35);
        assert_eq!(ladder[0].spot, 2.0);
        assert!(ladder.iter().all(|p| p.greeks.is_finite()));
    }

    #[test]
    fn test_short_ladder_negates_delta() {
        let config = CliConfig::default();
        let long = parse(&render(&args(100.0), &config).unwrap());
        let mut short_args = args(100.0);
        short_args.contract.position = Position::Short;
        let short = parse(&render(&short_args, &config).unwrap());
        for (l, s) in long.iter().zip(&short) {
            assert_eq!(s.greeks.delta, -l.greeks.delta);
            assert_eq!(s.greeks.price, l.greeks.price);
        }
    }

    #[test]
    fn test_bad_step_rejected() {
        let mut bad = args(100.0);
        bad.step = 0.0;
        assert!(matches!(
            render(&bad, &CliConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_bad_volatility_rejected() {
        let mut bad = args(100.0);
        bad.volatility = -0.2;
        assert!(matches!(
            render(&bad, &CliConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }
}
