//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILTER: &str = "academix=info";

/// Tracing filter directives from `RUST_LOG`, or the default filter
pub fn log_filter() -> String {
    env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Which `TeamsApi` implementation to wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    #[default]
    Http,
    Mock,
}

impl FromStr for ApiProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(ApiProvider::Http),
            "mock" => Ok(ApiProvider::Mock),
            other => Err(Error::Configuration(format!(
                "Unknown API provider: {}. Supported providers: http, mock",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiProvider::Http => write!(f, "http"),
            ApiProvider::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the AcademiX REST backend
    pub api_base_url: String,
    pub api_provider: ApiProvider,
    pub request_timeout_secs: u64,

    /// Session values, the replacement for browser storage
    pub user_token: Option<String>,
    pub user_id: Option<String>,
    pub user_role: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("api_provider", &self.api_provider)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_token", &self.user_token.as_ref().map(|_| "[REDACTED]"))
            .field("user_id", &self.user_id)
            .field("user_role", &self.user_role)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let api_base_url = env::var("ACADEMIX_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        if api_base_url.trim().is_empty() {
            return Err(Error::Configuration(
                "ACADEMIX_API_BASE_URL cannot be empty".to_string(),
            ));
        }

        let api_provider = match env::var("ACADEMIX_API_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => ApiProvider::default(),
        };

        let config = Self {
            api_base_url,
            api_provider,
            request_timeout_secs: env::var("ACADEMIX_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),

            user_token: non_blank_var("ACADEMIX_USER_TOKEN"),
            user_id: non_blank_var("ACADEMIX_USER_ID"),
            user_role: non_blank_var("ACADEMIX_USER_ROLE"),
        };

        tracing::debug!(
            api_base_url = %config.api_base_url,
            api_provider = %config.api_provider,
            "Configuration loaded"
        );

        Ok(config)
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
