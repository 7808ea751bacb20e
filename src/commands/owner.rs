//! Player ownership command: which team owns a named player.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{EntryId, LeagueId, PlayerId};
use crate::error::{FplError, Result};
use crate::fpl::http::FplClient;
use crate::fpl::types::{Bootstrap, ElementStatusList, LeagueDetails};

use super::resolve_league_id;

#[derive(Debug, Clone, Serialize)]
struct OwnerRow {
    player: String,
    /// `None` for unowned free agents.
    team_name: Option<String>,
}

/// Every player matching `needle` (case-insensitive substring of web name or
/// full name) joined against the ownership records.
fn owner_rows(
    details: &LeagueDetails,
    status: &ElementStatusList,
    bootstrap: &Bootstrap,
    needle: &str,
) -> Vec<OwnerRow> {
    let needle = needle.to_lowercase();
    let owners: BTreeMap<PlayerId, EntryId> = status
        .element_status
        .iter()
        .filter_map(|s| s.owner.map(|owner| (s.element, owner)))
        .collect();

    bootstrap
        .elements
        .iter()
        .filter(|element| {
            element.web_name.to_lowercase().contains(&needle)
                || format!("{} {}", element.first_name, element.second_name)
                    .to_lowercase()
                    .contains(&needle)
        })
        .map(|element| OwnerRow {
            player: element.web_name.clone(),
            // Element-status owners are global entry IDs; map back to the league entry
            team_name: owners
                .get(&element.id)
                .and_then(|owner| {
                    details
                        .league_entries
                        .iter()
                        .find(|entry| entry.entry_id == *owner)
                })
                .map(|entry| entry.player_first_name.clone()),
        })
        .collect()
}

/// Handle the owner command: find the owning team for every player whose
/// name matches, reporting free agents as unowned.
pub async fn handle_owner(
    league_id: Option<LeagueId>,
    player: String,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::new();

    let details = client.league_details(league_id).await?;
    let status = client.element_status(league_id).await?;
    let bootstrap = client.bootstrap().await?;

    let rows = owner_rows(&details, &status, &bootstrap, &player);
    if rows.is_empty() {
        return Err(FplError::PlayerNotFound { name: player });
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        match &row.team_name {
            Some(team_name) => println!("{:<20} owned by {}", row.player, team_name),
            None => println!("{:<20} unowned (free agent)", row.player),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_details() -> LeagueDetails {
        serde_json::from_value(json!({
            "league_entries": [
                { "id": 101, "entry_id": 55001, "player_first_name": "Ian" },
                { "id": 102, "entry_id": 55002, "player_first_name": "Priya" }
            ],
            "matches": [],
            "standings": []
        }))
        .unwrap()
    }

    fn sample_status() -> ElementStatusList {
        serde_json::from_value(json!({
            "element_status": [
                { "element": 233, "owner": 55001 },
                { "element": 310, "owner": 55002 },
                { "element": 412, "owner": null }
            ]
        }))
        .unwrap()
    }

    fn sample_bootstrap() -> Bootstrap {
        serde_json::from_value(json!({
            "elements": [
                {
                    "id": 233, "web_name": "Haaland", "first_name": "Erling",
                    "second_name": "Haaland", "element_type": 4
                },
                {
                    "id": 310, "web_name": "Salah", "first_name": "Mohamed",
                    "second_name": "Salah", "element_type": 3
                },
                {
                    "id": 412, "web_name": "Gordon", "first_name": "Anthony",
                    "second_name": "Gordon", "element_type": 3
                }
            ],
            "element_types": []
        }))
        .unwrap()
    }

    #[test]
    fn test_owned_player_maps_to_team() {
        let rows = owner_rows(
            &sample_details(),
            &sample_status(),
            &sample_bootstrap(),
            "salah",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player, "Salah");
        assert_eq!(rows[0].team_name.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_free_agent_reported_unowned() {
        let rows = owner_rows(
            &sample_details(),
            &sample_status(),
            &sample_bootstrap(),
            "Gordon",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_name, None);
    }

    #[test]
    fn test_full_name_substring_match() {
        // "erling h" only appears in first_name + second_name, not web_name
        let rows = owner_rows(
            &sample_details(),
            &sample_status(),
            &sample_bootstrap(),
            "erling h",
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player, "Haaland");
        assert_eq!(rows[0].team_name.as_deref(), Some("Ian"));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let rows = owner_rows(
            &sample_details(),
            &sample_status(),
            &sample_bootstrap(),
            "Kane",
        );
        assert!(rows.is_empty());
    }
}
