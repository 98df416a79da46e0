//! Configuration management for tutorbook.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::registry::OverlapPolicy;
use std::env;
use std::str::FromStr;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether overlapping appointments are refused (default: allow)
    pub overlap_policy: OverlapPolicy,

    /// Maximum number of person lookup results (default: 5), applied by
    /// `AddressBook::find_persons_with`
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30), applied by
    /// `AddressBook::find_persons_with`
    pub match_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TUTORBOOK_OVERLAP_POLICY`: `allow` or `reject` (default: allow)
    /// - `TUTORBOOK_MAX_MATCH_RESULTS`: Max lookup results (default: 5)
    /// - `TUTORBOOK_MATCH_CONFIDENCE`: Min fuzzy confidence (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let overlap_policy = Self::parse_env("TUTORBOOK_OVERLAP_POLICY", defaults.overlap_policy)?;
        let max_match_results =
            Self::parse_env("TUTORBOOK_MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold = Self::parse_env(
            "TUTORBOOK_MATCH_CONFIDENCE",
            defaults.match_confidence_threshold,
        )?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "TUTORBOOK_MATCH_CONFIDENCE".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            overlap_policy,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable, falling back to `default` when unset.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
    {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Unrecognized value: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            overlap_policy: OverlapPolicy::Allow,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "warn".to_string(),
        }
    }
}
