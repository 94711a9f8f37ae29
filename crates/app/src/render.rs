//! Text rendering of the teams view

use academix_teams::{Invitation, ReconciledTeam, TeamsTab, TeamsView};

/// Tab header followed by the active tab's content
pub fn render_view(view: &TeamsView, tab: TeamsTab) -> String {
    let mut out = format!(
        "My Teams ({})    Invitations ({})\n\n",
        view.teams.len(),
        view.invitations.len()
    );

    match tab {
        TeamsTab::MyTeams => out.push_str(&render_my_teams(view)),
        TeamsTab::Invitations => out.push_str(&render_invitations(&view.invitations)),
    }
    out
}

pub fn render_my_teams(view: &TeamsView) -> String {
    if view.teams.is_empty() {
        return "You are not in any team yet.\n".to_string();
    }

    let selected = view.selected_team_id.as_deref();
    let mut out = String::new();
    for team in &view.teams {
        out.push_str(&render_team_row(team, selected == Some(team.id.as_str())));
        out.push('\n');
    }

    if let Some(team) = view.selected_team() {
        out.push('\n');
        out.push_str(&render_team_detail(team));
    }
    out
}

pub fn render_team_row(team: &ReconciledTeam, selected: bool) -> String {
    format!(
        "{} {}{} [{}] {} | {}",
        if selected { ">" } else { " " },
        team.name,
        if team.is_leader { " (leader)" } else { "" },
        team.status,
        team.capacity_label(),
        team.competition_title
    )
}

pub fn render_team_detail(team: &ReconciledTeam) -> String {
    let mut lines = vec![
        team.name.clone(),
        format!("Competition: {}", team.competition_title),
    ];
    if let Some(hint) = team.activation_hint() {
        lines.push(hint);
    }
    lines.push(format!(
        "Leader: {}",
        team.leader_id.as_deref().unwrap_or("unknown")
    ));
    if let Some(open) = team.open_spots {
        lines.push(format!("Open spots: {}", open));
    }
    lines.push(format!("Members ({}):", team.member_count()));
    lines.extend(
        team.members
            .iter()
            .map(|member| format!("  [{}] {} ({})", member.avatar, member.name, member.role)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_invitations(invitations: &[Invitation]) -> String {
    if invitations.is_empty() {
        return "No pending invitations.\n".to_string();
    }

    invitations
        .iter()
        .map(|invitation| {
            format!(
                "{} {} | {} | leader {}\n",
                invitation.team_id,
                invitation.team_name,
                invitation.competition_title,
                invitation.leader_id.as_deref().unwrap_or("unknown")
            )
        })
        .collect()
}
