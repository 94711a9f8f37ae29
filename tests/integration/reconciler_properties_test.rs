//! Reconciler properties over backend-shaped JSON
//!
//! Exercises the pure reconciliation functions with inputs decoded the same
//! way the HTTP client decodes them.

use serde_json::{json, Value};

use academix_teams::{
    dedupe_teams, discover_invitations, reconcile_my_teams, Competition, CompetitionMap, RawTeam,
};

fn competitions(value: Value) -> CompetitionMap {
    let list: Vec<Competition> = serde_json::from_value(value).unwrap();
    CompetitionMap::new(list)
}

fn teams(value: Value) -> Vec<RawTeam> {
    serde_json::from_value(value).unwrap()
}

fn scenario_competitions() -> CompetitionMap {
    competitions(json!([{ "competitionId": "C1", "title": "Code Sprint",
                          "participationType": "TEAM", "maxTeamSize": 4 }]))
}

fn scenario_teams(accepted: Value) -> Vec<RawTeam> {
    teams(json!([{
        "teamId": "T1",
        "teamName": "Rustaceans",
        "competitionId": "C1",
        "leaderId": "U1",
        "memberIds": ["U1", "U2", "U3"],
        "acceptedMemberIds": accepted,
        "status": "PENDING"
    }]))
}

#[test]
fn test_invited_member_sees_one_invitation() {
    let map = scenario_competitions();
    let all = scenario_teams(json!(["U1"]));
    let my_teams: Vec<RawTeam> = Vec::new();

    assert!(reconcile_my_teams(&my_teams, &map, Some("U2")).is_empty());

    let invitations = discover_invitations(&all, &map, Some("U2"));
    assert_eq!(invitations.len(), 1);
    assert_eq!(invitations[0].team_id, "T1");
    assert_eq!(invitations[0].team_name, "Rustaceans");
}

#[test]
fn test_leader_sees_no_invitation() {
    let map = scenario_competitions();
    let all = scenario_teams(json!(["U1"]));
    assert!(discover_invitations(&all, &map, Some("U1")).is_empty());
}

#[test]
fn test_accepted_member_sees_no_invitation() {
    let map = scenario_competitions();
    let all = scenario_teams(json!(["U1", "U2"]));
    assert!(discover_invitations(&all, &map, Some("U2")).is_empty());
}

#[test]
fn test_capacity_arithmetic() {
    let map = competitions(json!([{ "competitionId": "C5", "maxTeamSize": 5 }]));
    let my_teams = teams(json!([
        { "teamId": "T1", "competitionId": "C5", "leaderId": "U1",
          "acceptedMemberIds": ["U1", "U2", "U3", "U2"] },
        { "teamId": "T2", "competitionId": "C5", "leaderId": "U1",
          "acceptedMemberIds": ["U1", "U2", "U3", "U4", "U5", "U6"] }
    ]));

    let reconciled = reconcile_my_teams(&my_teams, &map, Some("U1"));
    assert_eq!(reconciled[0].open_spots, Some(2));
    assert_eq!(reconciled[1].open_spots, Some(0));
}

#[test]
fn test_missing_competition_uses_raw_id() {
    let map = scenario_competitions();
    let my_teams = teams(json!([
        { "teamId": "T9", "competitionId": "C-unknown", "leaderId": "U1", "acceptedMemberIds": ["U1"] }
    ]));

    let reconciled = reconcile_my_teams(&my_teams, &map, Some("U1"));
    assert_eq!(reconciled.len(), 1);
    assert_eq!(reconciled[0].competition_title, "C-unknown");
    assert!(reconciled[0].is_leader);
}

#[test]
fn test_reordered_duplicates_yield_one_invitation() {
    let map = scenario_competitions();
    let all = teams(json!([
        { "teamId": "T1", "competitionId": "C1", "leaderId": "U1",
          "memberIds": ["U1", "U2", "U3"], "acceptedMemberIds": ["U1"] },
        { "teamId": "T1", "competitionId": "C1", "leaderId": "U1",
          "memberIds": ["U3", "U2", "U1"], "acceptedMemberIds": ["U1"] }
    ]));

    assert_eq!(discover_invitations(&all, &map, Some("U2")).len(), 1);
    assert_eq!(dedupe_teams(all.clone()).len(), 1);
    assert_eq!(
        discover_invitations(&dedupe_teams(all.clone()), &map, Some("U2")),
        discover_invitations(&all, &map, Some("U2"))
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let map = scenario_competitions();
    let all = teams(json!([
        { "teamId": "T3", "competitionId": "C1", "leaderId": "U7",
          "memberIds": ["U2"], "acceptedMemberIds": ["U7"] },
        { "teamId": "T1", "competitionId": "C1", "leaderId": "U1",
          "memberIds": ["U1", "U2"], "acceptedMemberIds": ["U2", "U1", "U2"] }
    ]));

    let first = (
        reconcile_my_teams(&all, &map, Some("U2")),
        discover_invitations(&all, &map, Some("U2")),
    );
    let second = (
        reconcile_my_teams(&all, &map, Some("U2")),
        discover_invitations(&all, &map, Some("U2")),
    );
    assert_eq!(first, second);
    assert_eq!(first.1.len(), 1);
    assert_eq!(first.0[1].member_ids, vec!["U2", "U1"]);
}
