// Environment-driven settings for the registration gateway.
//
// - REGISTRATION_ENDPOINT: absolute URL of the registration endpoint.
// - REGISTRATION_TIMEOUT_MS: request timeout in milliseconds, greater than 0.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const ENDPOINT_VAR: &str = "REGISTRATION_ENDPOINT";
pub const TIMEOUT_VAR: &str = "REGISTRATION_TIMEOUT_MS";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/registro";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidEndpoint { var: &'static str, value: String },

    #[error("{var} must be a positive number of milliseconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint = match lookup(ENDPOINT_VAR) {
            Some(value) => Url::parse(&value).map_err(|_| ConfigError::InvalidEndpoint {
                var: ENDPOINT_VAR,
                value,
            })?,
            None => Url::parse(DEFAULT_ENDPOINT).map_err(|_| ConfigError::InvalidEndpoint {
                var: ENDPOINT_VAR,
                value: DEFAULT_ENDPOINT.to_string(),
            })?,
        };

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(ConfigError::InvalidTimeout { var: TIMEOUT_VAR, value }),
            },
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}
