use std::str::FromStr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// How each handled turn is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[<action>] <response>` per line.
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("'{}' is not a valid output format", other)),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub output: OutputFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let output = match std::env::var("TRIAGE_OUTPUT") {
            Ok(value) => value
                .parse::<OutputFormat>()
                .map_err(|e| ConfigError::InvalidValue("TRIAGE_OUTPUT".to_string(), e))?,
            Err(std::env::VarError::NotPresent) => OutputFormat::Text,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue(
                    "TRIAGE_OUTPUT".to_string(),
                    "value is not valid unicode".to_string(),
                ));
            }
        };

        Ok(Self { log_level, output })
    }
}
