//! HTTP client for the AcademiX REST backend
//!
//! Collections are decoded leniently: a body that is not a JSON array is an
//! empty list, and elements that fail to decode are skipped.

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use academix_common::{Error, Result};
use academix_teams::{Competition, RawTeam, TeamsApi, UserProfile};

use crate::ClientConfig;

/// Real HTTP client for the AcademiX REST backend.
pub struct HttpTeamsApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTeamsApi {
    /// Create a new client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| Error::Configuration(format!("Invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "Invalid base URL: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Configuration("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<String> {
        let response = self
            .http
            .request(method, url.clone())
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::new());

        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::debug!(url = %url, status = status.as_u16(), message = %message, "Request failed");
            return Err(Error::from_status(status.as_u16(), message));
        }

        Ok(body)
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        token: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(segments)?;
        let body = self.send(Method::GET, url, token, query).await?;
        Ok(decode_collection(&body))
    }
}

/// The body's `message`, else `error`, else a generic status line
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()))
}

fn decode_collection<T: DeserializeOwned>(body: &str) -> Vec<T> {
    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::debug!("Expected a JSON array, treating as empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::debug!(error = %e, "Response body is not JSON, treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping undecodable element");
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl TeamsApi for HttpTeamsApi {
    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        let url = self.endpoint(&["api", "users", "me"])?;
        let body = self.send(Method::GET, url, token, &[]).await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn list_competitions(&self, token: &str) -> Result<Vec<Competition>> {
        self.get_collection(token, &["competitions"], &[]).await
    }

    async fn list_my_teams(&self, token: &str) -> Result<Vec<RawTeam>> {
        self.get_collection(token, &["teams", "my"], &[]).await
    }

    async fn list_competition_teams(
        &self,
        token: &str,
        competition_id: &str,
    ) -> Result<Vec<RawTeam>> {
        self.get_collection(token, &["teams"], &[("competitionId", competition_id)])
            .await
    }

    async fn accept_invitation(&self, token: &str, team_id: &str) -> Result<()> {
        let url = self.endpoint(&["teams", team_id, "accept-invitation"])?;
        self.send(Method::POST, url, token, &[]).await?;
        tracing::debug!(team_id = %team_id, "Invitation accept request sent");
        Ok(())
    }
}
