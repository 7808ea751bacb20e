//! League standings command

use serde::Serialize;

use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::fpl::http::FplClient;

use super::{entry_name, resolve_league_id};

#[derive(Debug, Clone, Serialize)]
struct StandingRow {
    team_name: String,
    total: i64,
    points_for: i64,
    points_against: i64,
    matches_won: u32,
    matches_drawn: u32,
    matches_lost: u32,
}

/// Handle the standings command. Default order is head-to-head record; with
/// `by_points_for` the table re-sorts on total points scored instead.
pub async fn handle_standings(
    league_id: Option<LeagueId>,
    by_points_for: bool,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();
    let details = client.league_details(league_id).await?;

    let mut rows: Vec<StandingRow> = details
        .standings
        .iter()
        .map(|standing| StandingRow {
            team_name: entry_name(&details, standing.league_entry),
            total: standing.total,
            points_for: standing.points_for,
            points_against: standing.points_against,
            matches_won: standing.matches_won,
            matches_drawn: standing.matches_drawn,
            matches_lost: standing.matches_lost,
        })
        .collect();

    if by_points_for {
        rows.sort_by(|a, b| b.points_for.cmp(&a.points_for));
    } else {
        rows.sort_by(|a, b| b.total.cmp(&a.total));
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<20} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5}",
        "Team", "W", "D", "L", "Pts", "PF", "PA"
    );
    for row in &rows {
        println!(
            "{:<20} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5}",
            row.team_name,
            row.matches_won,
            row.matches_drawn,
            row.matches_lost,
            row.total,
            row.points_for,
            row.points_against,
        );
    }

    Ok(())
}
