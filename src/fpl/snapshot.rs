//! Assembles a read-only [`GameweekSnapshot`] for the scoring engine.
//!
//! All data is fetched up front for one gameweek and handed to the engine as
//! an immutable snapshot; the engine itself never touches the network. The
//! caller is responsible for not mixing gameweeks within one snapshot, which
//! this module guarantees by deriving every request from the same `gameweek`
//! argument.

use std::collections::BTreeMap;

use crate::cli::types::Gameweek;
use crate::error::{FplError, Result};
use crate::fpl::http::FplClient;
use crate::fpl::types::{LeagueDetails, LeagueEntry};
use crate::scoring::GameweekSnapshot;

/// Fetch live statistics and every entry's picks for `gameweek`, in league
/// standings order (falling back to entry order before any match has been
/// played).
pub async fn fetch_snapshot(
    client: &FplClient,
    details: &LeagueDetails,
    gameweek: Gameweek,
) -> Result<GameweekSnapshot> {
    let live = client.event_live(gameweek).await?;

    let ordered = ordered_entries(details)?;
    let mut entries = Vec::with_capacity(ordered.len());
    let mut rosters = BTreeMap::new();
    for entry in ordered {
        let picks = client.entry_event(entry.entry_id, gameweek).await?.picks;
        entries.push(entry.id);
        rosters.insert(entry.id, picks);
    }

    Ok(GameweekSnapshot::new(
        gameweek,
        entries,
        rosters,
        live.elements,
        live.fixtures,
    ))
}

fn ordered_entries(details: &LeagueDetails) -> Result<Vec<&LeagueEntry>> {
    if details.standings.is_empty() {
        return Ok(details.league_entries.iter().collect());
    }

    details
        .standings
        .iter()
        .map(|standing| {
            details
                .league_entries
                .iter()
                .find(|entry| entry.id == standing.league_entry)
                .ok_or_else(|| FplError::EntryNotFound {
                    entry: standing.league_entry.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details_with_standings() -> LeagueDetails {
        serde_json::from_value(json!({
            "league_entries": [
                { "id": 101, "entry_id": 55001, "player_first_name": "Ian" },
                { "id": 102, "entry_id": 55002, "player_first_name": "Priya" }
            ],
            "matches": [],
            "standings": [
                { "league_entry": 102, "rank": 1 },
                { "league_entry": 101, "rank": 2 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_ordered_entries_follows_standings() {
        let details = details_with_standings();
        let ordered = ordered_entries(&details).unwrap();

        let names: Vec<&str> = ordered
            .iter()
            .map(|entry| entry.player_first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Priya", "Ian"]);
    }

    #[test]
    fn test_ordered_entries_falls_back_to_entry_order() {
        let mut details = details_with_standings();
        details.standings.clear();

        let ordered = ordered_entries(&details).unwrap();
        assert_eq!(ordered[0].player_first_name, "Ian");
        assert_eq!(ordered[1].player_first_name, "Priya");
    }

    #[test]
    fn test_ordered_entries_unknown_standing_entry() {
        let mut details = details_with_standings();
        details.standings[0].league_entry = crate::cli::types::EntryId::new(999);

        let result = ordered_entries(&details);
        assert!(matches!(
            result,
            Err(FplError::EntryNotFound { entry }) if entry == "999"
        ));
    }
}
