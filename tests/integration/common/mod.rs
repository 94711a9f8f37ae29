//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests:
//! - A wiremock server standing in for the AcademiX REST backend
//! - JSON fixtures shaped like the backend's responses
//! - Session and service construction

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use academix_client::{ClientConfig, TeamsApiFactory};
use academix_common::{ApiProvider, Session, UserRole};
use academix_teams::TeamsService;

pub const TOKEN: &str = "test-token";

/// Mock backend plus a service wired to it over HTTP
pub struct TestBackend {
    pub server: MockServer,
    pub service: TeamsService,
}

impl TestBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let api = TeamsApiFactory::create(ClientConfig {
            provider: ApiProvider::Http,
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        })
        .expect("HTTP client should build against the mock server");

        Self {
            server,
            service: TeamsService::new(api),
        }
    }

    pub async fn profile(&self, user_id: &str) {
        self.get("/api/users/me", json!({ "id": user_id, "name": user_id }))
            .await;
    }

    pub async fn competitions(&self, body: Value) {
        self.get("/competitions", body).await;
    }

    pub async fn my_teams(&self, body: Value) {
        self.get("/teams/my", body).await;
    }

    /// Serve `body` for the first `times` requests of "my teams" only
    pub async fn my_teams_times(&self, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/teams/my"))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    pub async fn roster(&self, competition_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("competitionId", competition_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` for the first `times` roster requests of one competition only
    pub async fn roster_times(&self, competition_id: &str, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("competitionId", competition_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    pub async fn failing_roster(&self, competition_id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("competitionId", competition_id))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    async fn get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

pub fn student(user_id: Option<&str>) -> Session {
    Session::new(
        Some(TOKEN.to_string()),
        user_id.map(str::to_string),
        UserRole::Student,
    )
}

pub fn competition(id: &str, title: &str, participation: &str, max: Option<u32>) -> Value {
    json!({
        "competitionId": id,
        "title": title,
        "participationType": participation,
        "minTeamSize": 2,
        "maxTeamSize": max,
    })
}

pub fn team(id: &str, competition_id: &str, leader: &str, invited: &[&str], accepted: &[&str]) -> Value {
    json!({
        "teamId": id,
        "teamName": format!("Team {}", id),
        "competitionId": competition_id,
        "leaderId": leader,
        "memberIds": invited,
        "acceptedMemberIds": accepted,
        "status": "PENDING",
    })
}
