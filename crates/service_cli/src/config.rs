//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::params::MarketAssumptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "greeks.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid market assumptions: {0}")]
    InvalidMarket(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Days to expiry, day count basis and risk-free rate
    pub market: MarketAssumptions,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            market: MarketAssumptions::default(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("GREEKS_RISK_FREE_RATE") {
            self.market.risk_free_rate = parse_env_f64("GREEKS_RISK_FREE_RATE", &rate)?;
        }
        if let Some(days) = lookup("GREEKS_DAYS_TO_EXPIRY") {
            self.market.days_to_expiry = parse_env_f64("GREEKS_DAYS_TO_EXPIRY", &days)?;
        }
        if let Some(basis) = lookup("GREEKS_DAYS_PER_YEAR") {
            self.market.days_per_year = parse_env_f64("GREEKS_DAYS_PER_YEAR", &basis)?;
        }
        if let Some(level) = lookup("GREEKS_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup("GREEKS_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.market
            .validate()
            .map_err(|e| ConfigError::InvalidMarket(e.to_string()))
    }
}

fn parse_env_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{} is not a number: {}", key, value)))
}

/// Global CLI arguments that affect configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// An explicit `--config` path must exist. Without one, `greeks.toml` in the
/// working directory is used if present, otherwise defaults.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.market, MarketAssumptions::default());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "INFO"
            format = "json"

            [market]
            days_to_expiry = 45.0
            risk_free_rate = 0.03
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.market.days_to_expiry, 45.0);
        assert_eq!(config.market.risk_free_rate, 0.03);
        // Unset field keeps its default
        assert_eq!(config.market.days_per_year, 365.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_toml_rejects_invalid_market() {
        let result = CliConfig::from_toml_str("[market]\ndays_per_year = 0.0\n");
        assert!(matches!(result, Err(ConfigError::InvalidMarket(_))));
    }

    #[test]
    fn test_toml_rejects_unknown_format() {
        let result = CliConfig::from_toml_str("format = \"xml\"\n");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = CliConfig::from_file(Path::new("/nonexistent/greeks.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GREEKS_RISK_FREE_RATE", "0.01"),
            ("GREEKS_DAYS_TO_EXPIRY", " 7 "),
            ("GREEKS_LOG_LEVEL", "debug"),
            ("GREEKS_FORMAT", "CSV"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env_with(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.market.risk_free_rate, 0.01);
        assert_eq!(config.market.days_to_expiry, 7.0);
        assert_eq!(config.market.days_per_year, 365.0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_env_rejects_non_numeric_rate() {
        let mut config = CliConfig::default();
        let result = config.apply_env_with(|key| {
            (key == "GREEKS_RISK_FREE_RATE").then(|| "five percent".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_log_level_wins() {
        let mut config = CliConfig {
            log_level: LogLevel::Error,
            ..CliConfig::default()
        };
        config.merge_with_cli(&CliArgs {
            config_file: None,
            log_level: Some(LogLevel::Debug),
        });
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_config_serialises_to_toml() {
        let text = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert!(text.contains("risk_free_rate = 0.05"));
        assert_eq!(CliConfig::from_toml_str(&text).unwrap(), CliConfig::default());
    }
}
