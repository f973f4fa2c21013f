//! Configuration management for the contact ledger.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact ledger.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON ledger file (default: "address_book.json")
    pub ledger_path: PathBuf,

    /// Birthday window in days when a request omits one (default: 7)
    pub birthday_window_days: i64,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LEDGER_PATH`: Ledger file location (default: "address_book.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Default birthday window (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which is reserved for responses
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let ledger_path = match env::var("LEDGER_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "LEDGER_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.ledger_path,
        };

        let birthday_window_days =
            Self::parse_env_window("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            ledger_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as a non-negative day count.
    fn parse_env_window(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<i64>() {
                Ok(days) if days >= 0 => Ok(days),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a non-negative number of days, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ledger_path: PathBuf::from("address_book.json"),
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
