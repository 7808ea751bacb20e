//! Waiver transaction feed command

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{Gameweek, LeagueId, PlayerId};
use crate::error::Result;
use crate::fpl::http::FplClient;

use super::resolve_league_id;

#[derive(Debug, Clone, Serialize)]
struct WaiverRow {
    gameweek: u8,
    team_name: String,
    kind: String,
    player_in: String,
    player_out: String,
    accepted: bool,
}

fn describe_kind(kind: &str) -> &'static str {
    match kind {
        "w" => "waiver",
        "f" => "free agent",
        _ => "transaction",
    }
}

/// Handle the waivers command: the league's transaction feed joined with team
/// and player names, optionally filtered to one gameweek.
pub async fn handle_waivers(
    league_id: Option<LeagueId>,
    gameweek: Option<Gameweek>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();

    let details = client.league_details(league_id).await?;
    let transactions = client.transactions(league_id).await?;
    let bootstrap = client.bootstrap().await?;

    let names: BTreeMap<PlayerId, &str> = bootstrap
        .elements
        .iter()
        .map(|e| (e.id, e.web_name.as_str()))
        .collect();
    // Transactions carry global entry IDs
    let teams: BTreeMap<_, &str> = details
        .league_entries
        .iter()
        .map(|entry| (entry.entry_id, entry.player_first_name.as_str()))
        .collect();

    let rows: Vec<WaiverRow> = transactions
        .transactions
        .iter()
        .filter(|t| gameweek.map_or(true, |gw| t.event == gw.as_u8()))
        .map(|t| WaiverRow {
            gameweek: t.event,
            team_name: teams
                .get(&t.entry)
                .map(|name| name.to_string())
                .unwrap_or_else(|| t.entry.to_string()),
            kind: describe_kind(&t.kind).to_string(),
            player_in: names
                .get(&t.element_in)
                .map(|name| name.to_string())
                .unwrap_or_else(|| t.element_in.to_string()),
            player_out: names
                .get(&t.element_out)
                .map(|name| name.to_string())
                .unwrap_or_else(|| t.element_out.to_string()),
            accepted: t.result == "a",
        })
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No transactions");
        return Ok(());
    }
    for row in &rows {
        let outcome = if row.accepted { "accepted" } else { "denied" };
        println!(
            "GW{:<2} {:<12} {:<10} in: {:<18} out: {:<18} [{}]",
            row.gameweek, row.team_name, row.kind, row.player_in, row.player_out, outcome
        );
    }

    Ok(())
}
