//! Configuration management for the HubSpot MCP Server.
//!
//! This module handles loading and validating configuration from environment
//! variables. It avoids polluting stdout (which MCP uses for communication) by
//! loading any .env file through `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for the hosted HubSpot API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com";

/// Configuration for the HubSpot MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// HubSpot private app access token
    pub access_token: String,

    /// HubSpot API base URL (overridable for testing)
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `HUBSPOT_ACCESS_TOKEN`: Private app access token
    ///
    /// Optional environment variables:
    /// - `HUBSPOT_API_BASE_URL`: API base URL (default: `https://api.hubapi.com`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_with_token(None)
    }

    /// Load configuration, preferring an explicitly supplied token
    /// (e.g. from the `--access-token` CLI flag) over the environment.
    pub fn from_env_with_token(token_override: Option<String>) -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't).
        // dotenvy doesn't print to stdout, keeping the MCP channel clean.
        let _ = dotenvy::dotenv();

        let access_token = match token_override {
            Some(token) => token,
            None => env::var("HUBSPOT_ACCESS_TOKEN")
                .map_err(|_| ConfigError::MissingVar("HUBSPOT_ACCESS_TOKEN".to_string()))?,
        };

        if access_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_ACCESS_TOKEN".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let api_base_url =
            env::var("HUBSPOT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            access_token,
            api_base_url,
            request_timeout,
            log_level,
        })
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            access_token: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: 30,
            log_level: "error".to_string(),
        }
    }
}
