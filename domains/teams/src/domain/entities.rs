//! Domain entities for the AcademiX teams domain
//!
//! Raw snapshots fetched from the backend (`Competition`, `RawTeam`,
//! `UserProfile`) and the derived, display-ready views produced by the
//! reconciler (`ReconciledTeam`, `TeamMember`, `Invitation`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::wire::{self, CompetitionWire, DecodeError, RawTeamWire};

/// How a competition is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationType {
    Individual,
    Team,
    #[default]
    Unknown,
}

impl ParticipationType {
    /// Parse the backend label case-insensitively
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "TEAM" => ParticipationType::Team,
            "INDIVIDUAL" => ParticipationType::Individual,
            _ => ParticipationType::Unknown,
        }
    }
}

impl std::fmt::Display for ParticipationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipationType::Individual => write!(f, "INDIVIDUAL"),
            ParticipationType::Team => write!(f, "TEAM"),
            ParticipationType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Competition snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CompetitionWire")]
pub struct Competition {
    pub competition_id: String,
    pub title: Option<String>,
    pub participation_type: ParticipationType,
    pub min_team_size: Option<u32>,
    pub max_team_size: Option<u32>,
}

impl TryFrom<CompetitionWire> for Competition {
    type Error = DecodeError;

    fn try_from(wire: CompetitionWire) -> Result<Self, Self::Error> {
        let competition_id = wire::first_text([wire.competition_id, wire.id])
            .ok_or(DecodeError::MissingField("competitionId"))?;

        Ok(Competition {
            competition_id,
            title: wire::text(wire.title),
            participation_type: wire::text(wire.participation_type)
                .map(|label| ParticipationType::from_label(&label))
                .unwrap_or_default(),
            min_team_size: wire::size(wire.min_team_size),
            max_team_size: wire::size(wire.max_team_size),
        })
    }
}

impl Competition {
    pub fn is_team_based(&self) -> bool {
        self.participation_type == ParticipationType::Team
    }
}

/// Team status label
///
/// Free-form on the wire; the well-known labels get their own variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeamStatus {
    Active,
    Pending,
    Inactive,
    Other(String),
    #[default]
    Unknown,
}

impl From<String> for TeamStatus {
    fn from(label: String) -> Self {
        let label = label.trim().to_uppercase();
        match label.as_str() {
            "" | "UNKNOWN" => TeamStatus::Unknown,
            "ACTIVE" => TeamStatus::Active,
            "PENDING" => TeamStatus::Pending,
            "INACTIVE" => TeamStatus::Inactive,
            _ => TeamStatus::Other(label),
        }
    }
}

impl From<TeamStatus> for String {
    fn from(status: TeamStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamStatus::Active => write!(f, "ACTIVE"),
            TeamStatus::Pending => write!(f, "PENDING"),
            TeamStatus::Inactive => write!(f, "INACTIVE"),
            TeamStatus::Other(label) => write!(f, "{}", label),
            TeamStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Team snapshot as returned by the roster endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTeamWire")]
pub struct RawTeam {
    pub team_id: String,
    pub team_name: String,
    pub competition_id: String,
    pub leader_id: Option<String>,
    pub status: TeamStatus,
    /// Invited identifiers; may include the leader and accepted members
    pub member_ids: Vec<String>,
    /// Identifiers whose membership is confirmed
    pub accepted_member_ids: Vec<String>,
}

impl TryFrom<RawTeamWire> for RawTeam {
    type Error = DecodeError;

    fn try_from(wire: RawTeamWire) -> Result<Self, Self::Error> {
        let team_id = wire::text(wire.team_id).ok_or(DecodeError::MissingField("teamId"))?;

        let member_ids = if matches!(wire.member_ids, Some(Value::Array(_))) {
            wire::ids(wire.member_ids)
        } else {
            wire::ids(wire.invited_member_ids)
        };

        Ok(RawTeam {
            team_id,
            team_name: wire::text(wire.team_name).unwrap_or_default(),
            competition_id: wire::text(wire.competition_id).unwrap_or_default(),
            leader_id: wire::text(wire.leader_id),
            status: wire::text(wire.status).map(TeamStatus::from).unwrap_or_default(),
            member_ids,
            accepted_member_ids: wire::ids(wire.accepted_member_ids),
        })
    }
}

impl RawTeam {
    pub fn is_invited(&self, user_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == user_id)
    }

    pub fn has_accepted(&self, user_id: &str) -> bool {
        self.accepted_member_ids.iter().any(|id| id == user_id)
    }

    pub fn is_led_by(&self, user_id: &str) -> bool {
        self.leader_id.as_deref() == Some(user_id)
    }
}

/// The viewer's profile (`GET /api/users/me`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Role of a member inside a reconciled team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Leader,
    Member,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Leader => write!(f, "leader"),
            MemberRole::Member => write!(f, "member"),
        }
    }
}

/// Materialized member row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    /// Display name; the identifier, there is no user directory lookup
    pub name: String,
    /// Upper-cased initial of the identifier
    pub avatar: String,
    pub role: MemberRole,
}

impl TeamMember {
    pub fn new(id: &str, leader_id: Option<&str>) -> Self {
        let avatar = id
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "U".to_string());
        let role = if leader_id == Some(id) {
            MemberRole::Leader
        } else {
            MemberRole::Member
        };

        TeamMember {
            id: id.to_string(),
            name: id.to_string(),
            avatar,
            role,
        }
    }
}

/// A team of the viewer, enriched with competition and capacity data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledTeam {
    pub id: String,
    pub name: String,
    pub competition_id: String,
    pub competition_title: String,
    pub leader_id: Option<String>,
    pub is_leader: bool,
    pub status: TeamStatus,
    pub invited_ids: Vec<String>,
    /// Deduplicated accepted members, first-seen order
    pub member_ids: Vec<String>,
    pub members: Vec<TeamMember>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    /// `None` when the competition declares no maximum size
    pub open_spots: Option<u32>,
}

impl ReconciledTeam {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_full(&self) -> bool {
        self.open_spots == Some(0)
    }

    /// "N members" without a known maximum, "N/M members" otherwise
    pub fn capacity_label(&self) -> String {
        match self.max_size {
            Some(max) => format!("{}/{} members", self.member_count(), max),
            None => format!("{} members", self.member_count()),
        }
    }

    /// Hint shown for teams still waiting to reach their minimum size
    pub fn activation_hint(&self) -> Option<String> {
        if self.status != TeamStatus::Pending {
            return None;
        }

        let mut hint = "Team is pending activation.".to_string();
        if let Some(min) = self.min_size {
            hint.push_str(&format!(" Minimum size: {}.", min));
        }
        Some(hint)
    }

    pub fn leader(&self) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.role == MemberRole::Leader)
    }
}

/// A pending invitation addressed to the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub team_id: String,
    pub team_name: String,
    pub leader_id: Option<String>,
    pub competition_id: String,
    pub competition_title: String,
}
