//! AcademiX REST clients
//!
//! Provides `TeamsApi` implementations with support for:
//! - The AcademiX REST backend over HTTP for production
//! - An in-memory mock backend for testing and development
//! - Configurable base URL and request timeout

pub mod http;
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use academix_common::{ApiProvider, Config, Error, Result};
use academix_teams::TeamsApi;

pub use http::HttpTeamsApi;
pub use mock::MockTeamsApi;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which implementation to create (http, mock)
    pub provider: ApiProvider,
    /// Base URL of the REST backend
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.api_provider,
            base_url: config.api_base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Factory for creating TeamsApi implementations.
pub struct TeamsApiFactory;

impl TeamsApiFactory {
    /// Create a TeamsApi based on configuration.
    pub fn create(config: ClientConfig) -> Result<Arc<dyn TeamsApi>> {
        match config.provider {
            ApiProvider::Http => {
                tracing::info!(base_url = %config.base_url, "Creating HTTP teams client");
                if config.base_url.trim().is_empty() {
                    return Err(Error::Configuration(
                        "A base URL is required for the HTTP provider".to_string(),
                    ));
                }
                Ok(Arc::new(HttpTeamsApi::new(&config)?))
            }
            ApiProvider::Mock => {
                tracing::info!("Creating mock teams client");
                Ok(Arc::new(MockTeamsApi::new()))
            }
        }
    }
}
