//! Head-to-head fixtures command

use serde::Serialize;

use crate::cli::types::{Gameweek, LeagueId};
use crate::error::Result;
use crate::fpl::http::FplClient;

use super::{current_gameweek, entry_name, resolve_league_id};

#[derive(Debug, Clone, Serialize)]
struct FixtureRow {
    home: String,
    home_score: i64,
    away: String,
    away_score: i64,
    finished: bool,
}

/// Handle the fixtures command: this gameweek's head-to-head matchups with
/// team names joined from the league entries.
pub async fn handle_fixtures(
    league_id: Option<LeagueId>,
    gameweek: Option<Gameweek>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();
    let details = client.league_details(league_id).await?;

    let gameweek = gameweek.unwrap_or_else(|| current_gameweek(&details));

    let rows: Vec<FixtureRow> = details
        .matches
        .iter()
        .filter(|m| m.event == gameweek.as_u8())
        .map(|m| FixtureRow {
            home: entry_name(&details, m.league_entry_1),
            home_score: m.league_entry_1_points,
            away: entry_name(&details, m.league_entry_2),
            away_score: m.league_entry_2_points,
            finished: m.finished,
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Gameweek {gameweek} fixtures:");
    if rows.is_empty() {
        println!("No fixtures scheduled");
        return Ok(());
    }
    for row in &rows {
        println!(
            "{:>16} {:>4} - {:<4} {:<16}",
            row.home, row.home_score, row.away_score, row.away
        );
    }

    Ok(())
}
