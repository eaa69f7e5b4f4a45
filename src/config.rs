//! Configuration management.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file loaded through `dotenvy`.

use crate::domain::DialCode;
use crate::error::{ConfigError, ConfigResult};
use crate::regions::CountryCatalog;
use std::env;
use std::path::PathBuf;

/// Configuration for the profile client and phone rules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile service base URL
    pub profile_api_url: String,

    /// Bearer token for the profile service
    pub profile_api_token: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Dial code preselected in phone fields (default: +254)
    pub default_dial_code: DialCode,

    /// JSON file replacing the built-in country list
    pub country_table_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PROFILE_API_BASE_URL`: Base URL for the profile service
    /// - `PROFILE_API_TOKEN`: Bearer token
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DEFAULT_DIAL_CODE`: Preselected dial code (default: 254)
    /// - `COUNTRY_TABLE_PATH`: JSON country table
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let profile_api_url = env::var("PROFILE_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("PROFILE_API_BASE_URL".to_string()))?;

        let profile_api_token = env::var("PROFILE_API_TOKEN")
            .map_err(|_| ConfigError::MissingVar("PROFILE_API_TOKEN".to_string()))?;

        if !profile_api_url.starts_with("http://") && !profile_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PROFILE_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if profile_api_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PROFILE_API_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let default_dial_code = match env::var("DEFAULT_DIAL_CODE") {
            Ok(val) => DialCode::new(&val).map_err(|e| ConfigError::InvalidValue {
                var: "DEFAULT_DIAL_CODE".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => Self::builtin_dial_code(),
        };

        let country_table_path = env::var("COUNTRY_TABLE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            profile_api_url,
            profile_api_token,
            request_timeout,
            default_dial_code,
            country_table_path,
            log_level,
        })
    }

    /// The country catalog named by `COUNTRY_TABLE_PATH`, or the built-in one.
    pub fn country_catalog(&self) -> ConfigResult<CountryCatalog> {
        match &self.country_table_path {
            Some(path) => CountryCatalog::from_path(path),
            None => Ok(CountryCatalog::builtin()),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    fn builtin_dial_code() -> DialCode {
        DialCode::from_static("254")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profile_api_url: String::new(),
            profile_api_token: String::new(),
            request_timeout: 10,
            default_dial_code: Self::builtin_dial_code(),
            country_table_path: None,
            log_level: "error".to_string(),
        }
    }
}
