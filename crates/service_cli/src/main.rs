//! Greeks CLI - Command Line Front End for the Black-Scholes Engine
//!
//! Prices European options and prints their Greeks.
//!
//! # Commands
//!
//! - `greeks greeks --spot S --strike K --volatility V` - Price and five Greeks
//! - `greeks payoff --strike K --premium P` - Payoff and profit at expiry
//! - `greeks ladder --strike K --volatility V` - Greeks across a spot sweep
//! - `greeks check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires `pricer_models` to
//! configuration, logging and output formatting. Results go to stdout, logs
//! to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::greeks::GreeksArgs;
use commands::ladder::LadderArgs;
use commands::payoff::PayoffArgs;
use config::{CliArgs, LogLevel};

/// Black-Scholes Greeks CLI
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./greeks.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option and print its Greeks
    Greeks(GreeksArgs),

    /// Print the payoff diagram at expiry
    Payoff(PayoffArgs),

    /// Print Greeks across a spot sweep around the strike
    Ladder(LadderArgs),

    /// Check the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.verbose.then_some(LogLevel::Debug),
    })?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Effective configuration");

    match &cli.command {
        Commands::Greeks(args) => commands::greeks::run(args, &config),
        Commands::Payoff(args) => commands::payoff::run(args, &config),
        Commands::Ladder(args) => commands::ladder::run(args, &config),
        Commands::Check => commands::check::run(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_core::types::{OptionType, Position};

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_greeks_command() {
        let cli = Cli::try_parse_from([
            "greeks", "greeks", "--spot", "100", "-k", "95", "--vol", "0.25", "--type", "put",
            "--position", "short", "--rate", "-0.01", "--format", "csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Greeks(args) => {
                assert_eq!(args.spot, 100.0);
                assert_eq!(args.strike, 95.0);
                assert_eq!(args.volatility, 0.25);
                assert_eq!(args.contract.option_type, OptionType::Put);
                assert_eq!(args.contract.position, Position::Short);
                assert_eq!(args.contract.format, Some(output::OutputFormat::Csv));
                assert_eq!(args.market.rate, Some(-0.01));
                assert_eq!(args.market.days, None);
            }
            _ => panic!("expected greeks command"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["greeks", "check", "--verbose", "--config", "x.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_unknown_option_type_rejected() {
        let result = Cli::try_parse_from([
            "greeks", "ladder", "-k", "100", "--volatility", "0.2", "--type", "straddle",
        ]);
        assert!(result.is_err());
    }
}
