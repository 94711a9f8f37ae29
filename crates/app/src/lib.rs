//! AcademiX teams composition root
//!
//! Wires configuration, the session, and a `TeamsApi` implementation into the
//! teams service, and renders its output for the command line.

pub mod cli;
pub mod render;

use std::sync::Arc;

use academix_client::{ClientConfig, TeamsApiFactory};
use academix_common::{Config, Error, Session, UserRole};
use academix_teams::{TeamsApi, TeamsService, TeamsTab, TeamsView};

use cli::{Cli, Command};

/// Session from configuration, with command-line overrides applied
pub fn build_session(cli: &Cli, config: &Config) -> anyhow::Result<Session> {
    let base = Session::from_config(config)?;
    let role = match cli.role.as_deref() {
        Some(label) => label.parse::<UserRole>()?,
        None => base.role,
    };

    Ok(Session::new(
        cli.token.clone().or(base.token),
        cli.user_id.clone().or(base.user_id),
        role,
    ))
}

/// Run the parsed command and return what should be printed
pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let session = build_session(&cli, config)?;
    let api = TeamsApiFactory::create(ClientConfig::from(config))?;
    execute(cli, &session, api).await
}

/// Run the parsed command against an explicit backend
pub async fn execute(
    cli: Cli,
    session: &Session,
    api: Arc<dyn TeamsApi>,
) -> anyhow::Result<String> {
    let service = TeamsService::new(api);

    match cli.command {
        Command::List { tab, team } => {
            let view = service.load(session, team.as_deref()).await?;
            output(&view, tab, cli.json, None)
        }
        Command::Accept { team_id } => {
            let view = service.accept_invitation(session, &team_id, None).await?;
            output(&view, TeamsTab::MyTeams, cli.json, Some("Invitation accepted."))
        }
    }
}

/// Viewer-facing message and stable error code for a failed command
pub fn failure(err: &anyhow::Error) -> (&'static str, String) {
    match err.downcast_ref::<Error>() {
        Some(e) => (e.error_code(), e.user_message()),
        None => ("UNEXPECTED_ERROR", err.to_string()),
    }
}

fn output(
    view: &TeamsView,
    tab: TeamsTab,
    json: bool,
    notice: Option<&str>,
) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(view)?);
    }

    let mut out = String::new();
    if let Some(notice) = notice {
        out.push_str(notice);
        out.push_str("\n\n");
    }
    out.push_str(&render::render_view(view, tab));
    Ok(out)
}
