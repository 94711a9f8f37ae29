use clap::{Parser, Subcommand};

use academix_teams::TeamsTab;

#[derive(Debug, Parser)]
#[command(name = "academix-teams")]
#[command(about = "Browse your AcademiX teams and pending invitations")]
pub struct Cli {
    /// Session token
    #[arg(long, global = true, env = "ACADEMIX_USER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Viewer id used when the profile endpoint cannot resolve one
    #[arg(long, global = true, env = "ACADEMIX_USER_ID")]
    pub user_id: Option<String>,

    /// Dashboard role: student, teacher, admin
    #[arg(long, global = true, env = "ACADEMIX_USER_ROLE")]
    pub role: Option<String>,

    /// Print the view as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show your teams and pending invitations
    List {
        /// Tab to render: my-teams, invitations
        #[arg(long, default_value_t = TeamsTab::MyTeams)]
        tab: TeamsTab,

        /// Team to show in detail
        #[arg(long)]
        team: Option<String>,
    },
    /// Accept a pending invitation
    Accept {
        /// Team id from the invitations list
        team_id: String,
    },
}
