//! Teams Page Workflow Integration Tests
//!
//! Loads the teams view end to end: HTTP client against a mock backend,
//! concurrent roster fetches, and reconciliation.

mod common;

use serde_json::json;

use academix_common::{Error, Session, UserRole};

use common::{competition, student, team, TestBackend, TOKEN};

#[tokio::test]
async fn test_load_teams_view_over_http() {
    let backend = TestBackend::start().await;
    backend.profile("U2").await;
    backend
        .competitions(json!([
            competition("C1", "Code Sprint", "TEAM", Some(4)),
            competition("C2", "Solo Quiz", "INDIVIDUAL", None),
            competition("C3", "Robotics", "team", None),
        ]))
        .await;
    backend
        .my_teams(json!([team("T2", "C1", "U2", &["U2", "U4"], &["U2", "U4", "U2"])]))
        .await;
    backend
        .roster(
            "C1",
            json!([
                team("T1", "C1", "U1", &["U1", "U2", "U3"], &["U1"]),
                team("T2", "C1", "U2", &["U2", "U4"], &["U2", "U4"]),
            ]),
        )
        .await;
    backend
        .roster(
            "C3",
            json!([
                team("T5", "C3", "U5", &["U2"], &["U5"]),
                team("T1", "C1", "U1", &["U2"], &["U1"]),
            ]),
        )
        .await;

    let view = backend.service.load(&student(None), None).await.unwrap();

    assert_eq!(view.current_user_id.as_deref(), Some("U2"));

    assert_eq!(view.teams.len(), 1);
    let my_team = &view.teams[0];
    assert!(my_team.is_leader);
    assert_eq!(my_team.member_ids, vec!["U2", "U4"]);
    assert_eq!(my_team.open_spots, Some(2));
    assert_eq!(my_team.capacity_label(), "2/4 members");
    assert_eq!(view.selected_team_id.as_deref(), Some("T2"));

    let invitations: Vec<(&str, &str)> = view
        .invitations
        .iter()
        .map(|i| (i.team_id.as_str(), i.competition_title.as_str()))
        .collect();
    assert_eq!(invitations, vec![("T1", "Code Sprint"), ("T5", "Robotics")]);
}

#[tokio::test]
async fn test_failed_roster_does_not_abort_load() {
    let backend = TestBackend::start().await;
    backend.profile("U2").await;
    backend
        .competitions(json!([
            competition("C1", "Code Sprint", "TEAM", Some(4)),
            competition("C3", "Robotics", "TEAM", None),
        ]))
        .await;
    backend.my_teams(json!([])).await;
    backend.failing_roster("C1", 500).await;
    backend
        .roster("C3", json!([team("T5", "C3", "U5", &["U2"], &["U5"])]))
        .await;

    let view = backend.service.load(&student(None), None).await.unwrap();

    assert!(view.teams.is_empty());
    assert!(view.selected_team_id.is_none());
    assert_eq!(view.invitations.len(), 1);
    assert_eq!(view.invitations[0].team_id, "T5");
}

#[tokio::test]
async fn test_malformed_payloads_degrade_gracefully() {
    let backend = TestBackend::start().await;
    backend.profile("U2").await;
    backend
        .competitions(json!([
            { "id": "C1", "title": "Code Sprint", "participationType": "TEAM", "maxTeamSize": "four" },
            { "title": "no identifier" },
        ]))
        .await;
    backend
        .my_teams(json!([
            { "teamId": "T7", "teamName": "Nulls", "competitionId": "C9",
              "memberIds": null, "acceptedMemberIds": ["U2", null, ""] },
            { "teamName": "no id" },
        ]))
        .await;
    backend.roster("C1", json!({ "unexpected": "shape" })).await;

    let view = backend.service.load(&student(None), None).await.unwrap();

    assert_eq!(view.teams.len(), 1);
    let nulls = &view.teams[0];
    assert_eq!(nulls.competition_title, "C9");
    assert_eq!(nulls.member_ids, vec!["U2"]);
    assert!(nulls.invited_ids.is_empty());
    assert_eq!(nulls.open_spots, None);
    assert!(view.invitations.is_empty());
}

#[tokio::test]
async fn test_competitions_failure_surfaces_backend_message() {
    let backend = TestBackend::start().await;
    backend.profile("U2").await;
    backend.my_teams(json!([])).await;
    wiremock::Mock::given(wiremock::matchers::path("/competitions"))
        .respond_with(
            wiremock::ResponseTemplate::new(503)
                .set_body_json(json!({ "error": "Service temporarily unavailable" })),
        )
        .mount(&backend.server)
        .await;

    let err = backend.service.load(&student(None), None).await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service temporarily unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unresolved_profile_uses_session_identity() {
    let backend = TestBackend::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/api/users/me"))
        .respond_with(wiremock::ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;
    backend
        .competitions(json!([competition("C1", "Code Sprint", "TEAM", Some(4))]))
        .await;
    backend.my_teams(json!([])).await;
    backend
        .roster("C1", json!([team("T1", "C1", "U1", &["U1", "U3"], &["U1"])]))
        .await;

    let view = backend.service.load(&student(Some("U3")), None).await.unwrap();
    assert_eq!(view.current_user_id.as_deref(), Some("U3"));
    assert_eq!(view.invitations.len(), 1);

    // Without any identity there is nothing to invite
    let view = backend.service.load(&student(None), None).await.unwrap();
    assert!(view.current_user_id.is_none());
    assert!(view.invitations.is_empty());
}

#[tokio::test]
async fn test_non_student_never_reaches_backend() {
    let backend = TestBackend::start().await;
    let admin = Session::new(Some(TOKEN.to_string()), Some("A1".to_string()), UserRole::Admin);

    let err = backend.service.load(&admin, None).await.unwrap_err();
    assert!(matches!(err, Error::Authorization(_)));

    let received = backend.server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}
