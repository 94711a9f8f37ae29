//! Teams service: loads the backend collections and runs the reconciler
//!
//! Fetches competitions, the viewer's teams and every team competition's
//! roster concurrently, then hands the snapshots to the pure reconciliation
//! functions. Each call produces a fresh `TeamsView`; callers replace their
//! previous view with the latest one.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use academix_common::{Error, Result, Session, UserRole};

use crate::client::TeamsApi;
use crate::domain::entities::{Invitation, RawTeam, ReconciledTeam};
use crate::domain::reconcile::{
    dedupe_teams, discover_invitations, reconcile_my_teams, team_competition_ids, CompetitionMap,
};
use crate::domain::selection::select_team;

/// Everything the teams page renders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsView {
    pub current_user_id: Option<String>,
    pub teams: Vec<ReconciledTeam>,
    pub invitations: Vec<Invitation>,
    pub selected_team_id: Option<String>,
}

impl TeamsView {
    pub fn selected_team(&self) -> Option<&ReconciledTeam> {
        let selected = self.selected_team_id.as_deref()?;
        self.teams.iter().find(|team| team.id == selected)
    }
}

/// Teams page orchestration over a `TeamsApi`
#[derive(Clone)]
pub struct TeamsService {
    api: Arc<dyn TeamsApi>,
}

impl TeamsService {
    pub fn new(api: Arc<dyn TeamsApi>) -> Self {
        Self { api }
    }

    /// Load and reconcile the viewer's teams and pending invitations
    pub async fn load(
        &self,
        session: &Session,
        previous_selection: Option<&str>,
    ) -> Result<TeamsView> {
        if session.role != UserRole::Student {
            return Err(Error::Authorization(
                "Teams are available for student role only.".to_string(),
            ));
        }
        let token = session
            .token()
            .ok_or_else(|| Error::Authentication("Please log in to view teams.".to_string()))?;

        let (profile, competitions, my_teams) = tokio::join!(
            self.api.current_user(token),
            self.api.list_competitions(token),
            self.api.list_my_teams(token),
        );

        let viewer = match profile {
            Ok(profile) => match profile.id.filter(|id| !id.trim().is_empty()) {
                Some(id) => session.with_user_id(id),
                None => session.clone(),
            },
            Err(e) => {
                warn!(error = %e, "Failed to resolve profile, using session identity");
                session.clone()
            }
        };
        let current_user_id = viewer.user_id;

        let competitions = competitions?;
        let my_teams = my_teams?;

        let roster_ids = team_competition_ids(&competitions);
        let all_teams = dedupe_teams(self.fetch_rosters(token, &roster_ids).await);

        let competition_map = CompetitionMap::new(competitions);
        let user_id = current_user_id.as_deref();

        let teams = reconcile_my_teams(&my_teams, &competition_map, user_id);
        let invitations = discover_invitations(&all_teams, &competition_map, user_id);
        let selected_team_id = select_team(&teams, previous_selection);

        info!(
            competitions = competition_map.len(),
            rosters = roster_ids.len(),
            teams = teams.len(),
            invitations = invitations.len(),
            "Teams view loaded"
        );

        Ok(TeamsView {
            current_user_id,
            teams,
            invitations,
            selected_team_id,
        })
    }

    /// Accept an invitation, then reload the view with refreshed inputs
    pub async fn accept_invitation(
        &self,
        session: &Session,
        team_id: &str,
        previous_selection: Option<&str>,
    ) -> Result<TeamsView> {
        let token = session
            .token()
            .ok_or_else(|| Error::Authentication("Please log in first.".to_string()))?;

        let team_id = team_id.trim();
        if team_id.is_empty() {
            return Err(Error::Validation("teamId is required".to_string()));
        }

        self.api.accept_invitation(token, team_id).await?;
        info!(team_id = %team_id, "Invitation accepted");

        self.load(session, previous_selection).await
    }

    /// Fetch every roster concurrently; a failed roster counts as empty
    async fn fetch_rosters(&self, token: &str, competition_ids: &[String]) -> Vec<RawTeam> {
        let requests = competition_ids.iter().map(|competition_id| async move {
            match self.api.list_competition_teams(token, competition_id).await {
                Ok(teams) => teams,
                Err(e) => {
                    warn!(
                        competition_id = %competition_id,
                        error = %e,
                        "Failed to fetch competition roster, treating as empty"
                    );
                    Vec::new()
                }
            }
        });

        let teams: Vec<RawTeam> = join_all(requests).await.into_iter().flatten().collect();
        debug!(
            rosters = competition_ids.len(),
            teams = teams.len(),
            "Fetched competition rosters"
        );
        teams
    }
}
