//! Port to the AcademiX REST backend
//!
//! The session token is passed on every call; implementations never read it
//! from ambient state.

use academix_common::Result;

use crate::domain::entities::{Competition, RawTeam, UserProfile};

/// REST collaborator consumed by the teams service
#[async_trait::async_trait]
pub trait TeamsApi: Send + Sync {
    /// `GET /api/users/me`
    async fn current_user(&self, token: &str) -> Result<UserProfile>;

    /// `GET /competitions`
    async fn list_competitions(&self, token: &str) -> Result<Vec<Competition>>;

    /// `GET /teams/my`: teams the viewer leads or has joined
    async fn list_my_teams(&self, token: &str) -> Result<Vec<RawTeam>>;

    /// `GET /teams?competitionId=...`: the full roster of one competition
    async fn list_competition_teams(
        &self,
        token: &str,
        competition_id: &str,
    ) -> Result<Vec<RawTeam>>;

    /// `POST /teams/{teamId}/accept-invitation`
    async fn accept_invitation(&self, token: &str, team_id: &str) -> Result<()>;
}
