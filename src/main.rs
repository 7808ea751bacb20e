//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_draft::{
    cli::{Commands, FplDraft, GetCmd},
    commands::{
        fixtures::handle_fixtures, owner::handle_owner, roster::handle_roster,
        scores::handle_scores, standings::handle_standings, waivers::handle_waivers,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FplDraft::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Scores { common, gameweek } => {
                handle_scores(common.league_id, gameweek, common.json).await?
            }

            GetCmd::Standings { common, points_for } => {
                handle_standings(common.league_id, points_for, common.json).await?
            }

            GetCmd::Fixtures { common, gameweek } => {
                handle_fixtures(common.league_id, gameweek, common.json).await?
            }

            GetCmd::Owner { common, player } => {
                handle_owner(common.league_id, player, common.json).await?
            }

            GetCmd::Roster { common, team } => {
                handle_roster(common.league_id, team, common.json).await?
            }

            GetCmd::Waivers { common, gameweek } => {
                handle_waivers(common.league_id, gameweek, common.json).await?
            }
        },
    }

    Ok(())
}
