//! Rendering of engine results as table, JSON or CSV text.

use std::fmt::Write as _;
use std::str::FromStr;

use pricer_models::analytical::{Greeks, LadderPoint};
use pricer_models::instruments::PayoffPoint;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Flat ladder row; the csv writer cannot serialise nested structs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct LadderRow {
    spot: f64,
    price: f64,
    delta: f64,
    gamma: f64,
    theta: f64,
    vega: f64,
    rho: f64,
}

impl From<&LadderPoint<f64>> for LadderRow {
    fn from(point: &LadderPoint<f64>) -> Self {
        let g = &point.greeks;
        Self {
            spot: point.spot,
            price: g.price,
            delta: g.delta,
            gamma: g.gamma,
            theta: g.theta,
            vega: g.vega,
            rho: g.rho,
        }
    }
}

fn to_csv<S: Serialize>(rows: impl IntoIterator<Item = S>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders a single set of Greeks.
pub fn render_greeks(greeks: &Greeks<f64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(greeks)? + "\n"),
        OutputFormat::Csv => to_csv([greeks]),
        OutputFormat::Table => {
            let rows = [
                ("Delta", greeks.delta, "Sensitivity to price"),
                ("Gamma", greeks.gamma, "Rate of change of Delta"),
                ("Theta", greeks.theta, "Time decay (daily)"),
                ("Vega", greeks.vega, "Sensitivity to volatility"),
                ("Rho", greeks.rho, "Sensitivity to interest rates"),
            ];

            let mut out = String::new();
            let _ = writeln!(out, "Option price: {:.2}", greeks.price);
            let _ = writeln!(out, "┌────────┬────────────┬───────────────────────────────┐");
            let _ = writeln!(out, "│ Greek  │ Value      │ Meaning                       │");
            let _ = writeln!(out, "├────────┼────────────┼───────────────────────────────┤");
            for (name, value, meaning) in rows {
                let _ = writeln!(out, "│ {:<6} │ {:>+10.3} │ {:<29} │", name, value, meaning);
            }
            let _ = writeln!(out, "└────────┴────────────┴───────────────────────────────┘");
            Ok(out)
        }
    }
}

/// Renders a payoff diagram.
pub fn render_payoff(points: &[PayoffPoint<f64>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(points)? + "\n"),
        OutputFormat::Csv => to_csv(points),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(out, "┌────────────┬────────────┬────────────┐");
            let _ = writeln!(out, "│ Spot       │ Payoff     │ Profit     │");
            let _ = writeln!(out, "├────────────┼────────────┼────────────┤");
            for p in points {
                let _ = writeln!(
                    out,
                    "│ {:>10.2} │ {:>10.2} │ {:>+10.2} │",
                    p.spot, p.payoff, p.profit
                );
            }
            let _ = writeln!(out, "└────────────┴────────────┴────────────┘");
            Ok(out)
        }
    }
}

/// Renders a Greeks ladder.
pub fn render_ladder(points: &[LadderPoint<f64>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(points)? + "\n"),
        OutputFormat::Csv => to_csv(points.iter().map(LadderRow::from)),
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "┌──────────┬──────────┬──────────┬──────────┬──────────┬──────────┬──────────┐"
            );
            let _ = writeln!(
                out,
                "│ Spot     │ Price    │ Delta    │ Gamma    │ Theta    │ Vega     │ Rho      │"
            );
            let _ = writeln!(
                out,
                "├──────────┼──────────┼──────────┼──────────┼──────────┼──────────┼──────────┤"
            );
            for p in points {
                let g = &p.greeks;
                let _ = writeln!(
                    out,
                    "│ {:>8.2} │ {:>8.3} │ {:>+8.3} │ {:>+8.3} │ {:>+8.3} │ {:>+8.3} │ {:>+8.3} │",
                    p.spot, g.price, g.delta, g.gamma, g.theta, g.vega, g.rho
                );
            }
            let _ = writeln!(
                out,
                "└──────────┴──────────┴──────────┴──────────┴──────────┴──────────┴──────────┘"
            );
            Ok(out)
        }
    }
}
