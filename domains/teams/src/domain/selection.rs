//! Teams page navigation: active tab and selected team

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use academix_common::Error;

use crate::domain::entities::ReconciledTeam;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamsTab {
    #[default]
    MyTeams,
    Invitations,
}

impl FromStr for TeamsTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "my-teams" => Ok(TeamsTab::MyTeams),
            "invitations" => Ok(TeamsTab::Invitations),
            other => Err(Error::Validation(format!("Unknown tab: {}", other))),
        }
    }
}

impl std::fmt::Display for TeamsTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamsTab::MyTeams => write!(f, "my-teams"),
            TeamsTab::Invitations => write!(f, "invitations"),
        }
    }
}

/// Keep the previous selection while it still exists, else pick the first team
pub fn select_team(teams: &[ReconciledTeam], previous: Option<&str>) -> Option<String> {
    if let Some(previous) = previous {
        if teams.iter().any(|team| team.id == previous) {
            return Some(previous.to_string());
        }
    }
    teams.first().map(|team| team.id.clone())
}
