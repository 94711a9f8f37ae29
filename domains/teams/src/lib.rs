//! Teams domain: competitions, team rosters, reconciliation, invitations

pub mod client;
pub mod domain;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::reconcile::{
    dedupe_teams, discover_invitations, reconcile_my_teams, reconcile_team,
    team_competition_ids, CompetitionMap,
};
pub use domain::selection::{select_team, TeamsTab};
pub use domain::wire::DecodeError;

pub use client::TeamsApi;
pub use service::{TeamsService, TeamsView};
