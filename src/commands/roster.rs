//! Team roster command: joins player ownership against the player pool.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{LeagueId, PlayerId};
use crate::error::{FplError, Result};
use crate::fpl::http::FplClient;
use crate::fpl::types::Element;

use super::{entry_name, resolve_league_id};

#[derive(Debug, Clone, Serialize)]
struct RosterRow {
    team_name: String,
    player: String,
    position: String,
    total_points: i64,
    goals_scored: i64,
    assists: i64,
    bonus: i64,
}

/// Handle the roster command: every owned player grouped by team, optionally
/// filtered to one team by manager name (case-insensitive substring).
pub async fn handle_roster(
    league_id: Option<LeagueId>,
    team: Option<String>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();

    let details = client.league_details(league_id).await?;
    let status = client.element_status(league_id).await?;
    let bootstrap = client.bootstrap().await?;

    let positions: BTreeMap<u8, &str> = bootstrap
        .element_types
        .iter()
        .map(|t| (t.id, t.singular_name_short.as_str()))
        .collect();
    let elements: BTreeMap<PlayerId, &Element> =
        bootstrap.elements.iter().map(|e| (e.id, e)).collect();

    let mut teams: BTreeMap<String, Vec<RosterRow>> = BTreeMap::new();
    for owned in status.element_status.iter() {
        let Some(owner) = owned.owner else {
            continue;
        };
        // Element-status owners are global entry IDs; map back to the league entry
        let Some(entry) = details
            .league_entries
            .iter()
            .find(|entry| entry.entry_id == owner)
        else {
            continue;
        };
        let Some(element) = elements.get(&owned.element) else {
            continue;
        };

        let team_name = entry_name(&details, entry.id);
        teams.entry(team_name.clone()).or_default().push(RosterRow {
            team_name,
            player: element.web_name.clone(),
            position: positions
                .get(&element.element_type)
                .copied()
                .unwrap_or("UNK")
                .to_string(),
            total_points: element.total_points,
            goals_scored: element.goals_scored,
            assists: element.assists,
            bonus: element.bonus,
        });
    }

    if let Some(filter) = &team {
        let needle = filter.to_lowercase();
        teams.retain(|name, _| name.to_lowercase().contains(&needle));
        if teams.is_empty() {
            return Err(FplError::EntryNotFound {
                entry: filter.clone(),
            });
        }
    }

    for rows in teams.values_mut() {
        rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    }

    if as_json {
        let all: Vec<&RosterRow> = teams.values().flatten().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    for (team_name, rows) in &teams {
        println!("== {team_name} ==");
        for row in rows {
            println!(
                "  {:<4} {:<20} {:>4} pts  {:>2} gls  {:>2} ast  {:>2} bns",
                row.position, row.player, row.total_points, row.goals_scored, row.assists, row.bonus
            );
        }
    }

    Ok(())
}
