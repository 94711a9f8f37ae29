//! Team roster reconciliation
//!
//! Pure functions that merge raw team snapshots with competition metadata:
//! - the viewer's own teams, enriched with membership and capacity info
//! - the pending invitations addressed to the viewer
//!
//! Nothing here performs I/O or fails. Missing competition metadata degrades
//! the display (the raw competition id stands in for the title) instead of
//! aborting the pass.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Competition, Invitation, RawTeam, ReconciledTeam, TeamMember};

/// Competition lookup keyed by competition identifier
#[derive(Debug, Clone, Default)]
pub struct CompetitionMap {
    by_id: HashMap<String, Competition>,
}

impl CompetitionMap {
    /// Build the lookup; a later duplicate identifier replaces an earlier one
    pub fn new<I>(competitions: I) -> Self
    where
        I: IntoIterator<Item = Competition>,
    {
        let by_id = competitions
            .into_iter()
            .map(|competition| (competition.competition_id.clone(), competition))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, competition_id: &str) -> Option<&Competition> {
        self.by_id.get(competition_id)
    }

    /// Competition title, or the raw identifier when the lookup misses
    pub fn title_for(&self, competition_id: &str) -> String {
        self.get(competition_id)
            .and_then(|competition| competition.title.as_deref())
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(competition_id)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Identifiers of team-participation competitions, input order, deduplicated
pub fn team_competition_ids(competitions: &[Competition]) -> Vec<String> {
    let mut seen = HashSet::new();
    competitions
        .iter()
        .filter(|competition| competition.is_team_based())
        .filter(|competition| seen.insert(competition.competition_id.as_str()))
        .map(|competition| competition.competition_id.clone())
        .collect()
}

/// Drop repeated team identifiers, keeping the first-seen copy
pub fn dedupe_teams<I>(teams: I) -> Vec<RawTeam>
where
    I: IntoIterator<Item = RawTeam>,
{
    let mut seen = HashSet::new();
    teams
        .into_iter()
        .filter(|team| seen.insert(team.team_id.clone()))
        .collect()
}

/// Reconcile a single team of the viewer
pub fn reconcile_team(
    team: &RawTeam,
    competitions: &CompetitionMap,
    current_user_id: Option<&str>,
) -> ReconciledTeam {
    let competition = competitions.get(&team.competition_id);

    let mut seen = HashSet::new();
    let member_ids: Vec<String> = team
        .accepted_member_ids
        .iter()
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    let min_size = competition.and_then(|c| c.min_team_size);
    let max_size = competition.and_then(|c| c.max_team_size);
    let accepted = u32::try_from(member_ids.len()).unwrap_or(u32::MAX);
    let open_spots = max_size.map(|max| max.saturating_sub(accepted));

    let is_leader = current_user_id.is_some_and(|user_id| team.is_led_by(user_id));

    let leader_id = team.leader_id.as_deref();
    let members = member_ids
        .iter()
        .map(|id| TeamMember::new(id, leader_id))
        .collect();

    ReconciledTeam {
        id: team.team_id.clone(),
        name: team.team_name.clone(),
        competition_id: team.competition_id.clone(),
        competition_title: competitions.title_for(&team.competition_id),
        leader_id: team.leader_id.clone(),
        is_leader,
        status: team.status.clone(),
        invited_ids: team
            .member_ids
            .iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect(),
        member_ids,
        members,
        min_size,
        max_size,
        open_spots,
    }
}

/// Reconcile the viewer's teams; output order follows `my_teams`
pub fn reconcile_my_teams(
    my_teams: &[RawTeam],
    competitions: &CompetitionMap,
    current_user_id: Option<&str>,
) -> Vec<ReconciledTeam> {
    my_teams
        .iter()
        .map(|team| reconcile_team(team, competitions, current_user_id))
        .collect()
}

/// Pending invitations for the viewer, in first-discovery order
///
/// A team yields an invitation when the viewer is invited, has not accepted,
/// and is not its leader. At most one invitation per team identifier.
pub fn discover_invitations(
    all_teams: &[RawTeam],
    competitions: &CompetitionMap,
    current_user_id: Option<&str>,
) -> Vec<Invitation> {
    let Some(user_id) = current_user_id.filter(|id| !id.is_empty()) else {
        return Vec::new();
    };

    let mut registered = HashSet::new();
    let mut invitations = Vec::new();

    for team in all_teams {
        if !team.is_invited(user_id) || team.has_accepted(user_id) || team.is_led_by(user_id) {
            continue;
        }

        if !registered.insert(team.team_id.as_str()) {
            continue;
        }

        invitations.push(Invitation {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            leader_id: team.leader_id.clone(),
            competition_id: team.competition_id.clone(),
            competition_title: competitions.title_for(&team.competition_id),
        });
    }

    tracing::debug!(
        teams = all_teams.len(),
        invitations = invitations.len(),
        "Discovered pending invitations"
    );

    invitations
}
