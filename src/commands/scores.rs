//! Live gameweek scores command

use crate::cli::types::{Gameweek, LeagueId};
use crate::error::Result;
use crate::fpl::http::FplClient;
use crate::fpl::snapshot::fetch_snapshot;
use crate::fpl::types::TeamScore;

use super::{current_gameweek, entry_name, resolve_league_id};

/// Handle the scores command: compute every team's live score for a gameweek
/// from raw player statistics, in league standings order.
pub async fn handle_scores(
    league_id: Option<LeagueId>,
    gameweek: Option<Gameweek>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();

    let details = client.league_details(league_id).await?;
    let gameweek = gameweek.unwrap_or_else(|| current_gameweek(&details));
    let snapshot = fetch_snapshot(&client, &details, gameweek).await?;

    let scores: Vec<TeamScore> = snapshot
        .score_all()
        .into_iter()
        .map(|(entry, points)| TeamScore {
            entry,
            team_name: entry_name(&details, entry),
            points,
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!("Gameweek {gameweek} scores:");
        for score in &scores {
            println!("{:<20} {:>4}", score.team_name, score.points);
        }
    }

    Ok(())
}
