//! Check command implementation
//!
//! Validates the effective configuration and prints it as TOML.

use pricer_core::types::OptionType;
use pricer_models::analytical::price_checked;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Renders the effective configuration after a smoke-test pricing.
pub fn render(config: &CliConfig) -> Result<String> {
    config.validate()?;

    // ATM call under the configured market must price to a finite value
    let input = config.market.input(100.0, 100.0, 0.2, OptionType::Call);
    let greeks = price_checked(&input)?;
    info!("Engine check passed: ATM call = {:.4}", greeks.price);

    let mut out = toml::to_string_pretty(config)?;
    out.push_str(&format!(
        "\n# expiry_years = {}\n# atm_call_price = {:.4}\n",
        config.market.expiry_years(),
        greeks.price
    ));
    Ok(out)
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config)?);
    info!("Configuration OK");
    Ok(())
}
