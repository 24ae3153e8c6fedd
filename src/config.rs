//! Runtime settings read from the environment (and `.env` via dotenv).

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "CIDR_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "CIDR_CALC_FORMAT";
pub const ENV_COLOR: &str = "CIDR_CALC_COLOR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            settings.log_config = PathBuf::from(path);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            settings.format = format.parse().map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            settings.color = parse_bool(&color).ok_or(format!(
                "{ENV_COLOR}: expected true/false, got '{color}'"
            ))?;
        }
        Ok(settings)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
