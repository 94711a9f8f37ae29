//! Mock AcademiX backend
//!
//! Keeps competitions and teams in memory and applies the backend's
//! invitation rules on accept. Thread-safe via `Arc<Mutex<>>`.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use academix_common::{Error, Result};
use academix_teams::{Competition, RawTeam, TeamStatus, TeamsApi, UserProfile};

#[derive(Debug, Default)]
struct MockState {
    user_id: Option<String>,
    competitions: Vec<Competition>,
    teams: Vec<RawTeam>,
    failing_rosters: HashSet<String>,
    accepted: Vec<String>,
}

/// In-memory backend for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MockTeamsApi {
    state: Arc<Mutex<MockState>>,
}

impl MockTeamsApi {
    /// Create an empty mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity returned by the profile endpoint.
    pub fn with_user(self, user_id: impl Into<String>) -> Self {
        self.lock_state().user_id = Some(user_id.into());
        self
    }

    pub fn with_competition(self, competition: Competition) -> Self {
        self.lock_state().competitions.push(competition);
        self
    }

    pub fn with_team(self, team: RawTeam) -> Self {
        self.lock_state().teams.push(team);
        self
    }

    /// Make the roster endpoint fail for one competition.
    pub fn fail_roster(self, competition_id: impl Into<String>) -> Self {
        self.lock_state().failing_rosters.insert(competition_id.into());
        self
    }

    /// Team ids of every successful accept call, in call order.
    pub fn accepted_invitations(&self) -> Vec<String> {
        self.lock_state().accepted.clone()
    }

    /// Current snapshot of a team.
    pub fn team(&self, team_id: &str) -> Option<RawTeam> {
        self.lock_state()
            .teams
            .iter()
            .find(|team| team.team_id == team_id)
            .cloned()
    }

    /// Clear all fixtures and recorded calls.
    pub fn reset(&self) {
        *self.lock_state() = MockState::default();
    }

    fn lock_state(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .expect("mock state lock poisoned by a panicked test")
    }

    fn state(&self) -> Result<MutexGuard<'_, MockState>> {
        self.state
            .lock()
            .map_err(|e| Error::Request(format!("mock state lock poisoned: {e}")))
    }
}

fn require_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::Authentication("Missing bearer token".to_string()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl TeamsApi for MockTeamsApi {
    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        require_token(token)?;
        let state = self.state()?;
        Ok(UserProfile {
            id: state.user_id.clone(),
            ..Default::default()
        })
    }

    async fn list_competitions(&self, token: &str) -> Result<Vec<Competition>> {
        require_token(token)?;
        Ok(self.state()?.competitions.clone())
    }

    async fn list_my_teams(&self, token: &str) -> Result<Vec<RawTeam>> {
        require_token(token)?;
        let state = self.state()?;
        let Some(user_id) = state.user_id.as_deref() else {
            return Ok(Vec::new());
        };
        Ok(state
            .teams
            .iter()
            .filter(|team| team.is_led_by(user_id) || team.has_accepted(user_id))
            .cloned()
            .collect())
    }

    async fn list_competition_teams(
        &self,
        token: &str,
        competition_id: &str,
    ) -> Result<Vec<RawTeam>> {
        require_token(token)?;
        let state = self.state()?;
        if state.failing_rosters.contains(competition_id) {
            tracing::debug!(competition_id = %competition_id, "Mock: failing roster request");
            return Err(Error::from_status(500, "Request failed (500)"));
        }
        Ok(state
            .teams
            .iter()
            .filter(|team| team.competition_id == competition_id)
            .cloned()
            .collect())
    }

    async fn accept_invitation(&self, token: &str, team_id: &str) -> Result<()> {
        require_token(token)?;
        let mut state = self.state()?;
        let user_id = state
            .user_id
            .clone()
            .ok_or_else(|| Error::Authentication("Unknown user".to_string()))?;

        let competition = {
            let team = state
                .teams
                .iter()
                .find(|team| team.team_id == team_id)
                .ok_or_else(|| Error::NotFound("Team not found".to_string()))?;
            state
                .competitions
                .iter()
                .find(|c| c.competition_id == team.competition_id)
                .cloned()
        };

        let team = state
            .teams
            .iter_mut()
            .find(|team| team.team_id == team_id)
            .ok_or_else(|| Error::NotFound("Team not found".to_string()))?;

        if team.is_led_by(&user_id) {
            return Err(Error::Conflict(
                "Leader does not need to accept invitation".to_string(),
            ));
        }
        if !team.is_invited(&user_id) {
            return Err(Error::Validation("Student was not invited".to_string()));
        }
        if team.has_accepted(&user_id) {
            return Ok(());
        }

        let next_count = u32::try_from(team.accepted_member_ids.len() + 1).unwrap_or(u32::MAX);
        let max_size = competition.as_ref().and_then(|c| c.max_team_size);
        if max_size.is_some_and(|max| next_count > max) {
            return Err(Error::Conflict(
                "Team exceeds maximum allowed size".to_string(),
            ));
        }

        team.accepted_member_ids.push(user_id.clone());
        let min_size = competition.as_ref().and_then(|c| c.min_team_size);
        if min_size.is_some_and(|min| next_count >= min) {
            team.status = TeamStatus::Active;
        }

        tracing::debug!(team_id = %team_id, user_id = %user_id, "Mock: invitation accepted");
        state.accepted.push(team_id.to_string());
        Ok(())
    }
}
