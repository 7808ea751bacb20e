//! Integration tests for command helpers

use fpl_draft::{
    commands::{current_gameweek, entry_name, resolve_league_id},
    fpl::types::LeagueDetails,
    EntryId, FplError, Gameweek, LeagueId, LEAGUE_ID_ENV_VAR,
};
use serde_json::json;

fn sample_details() -> LeagueDetails {
    serde_json::from_value(json!({
        "league_entries": [
            { "id": 101, "entry_id": 55001, "player_first_name": "Ian" },
            { "id": 102, "entry_id": 55002, "player_first_name": "Priya" }
        ],
        "matches": [
            { "event": 1, "league_entry_1": 101, "league_entry_2": 102, "finished": true },
            { "event": 2, "league_entry_1": 102, "league_entry_2": 101, "finished": true },
            { "event": 3, "league_entry_1": 101, "league_entry_2": 102, "started": true, "finished": false }
        ],
        "standings": []
    }))
    .unwrap()
}

#[test]
fn test_resolve_league_id() {
    // Exercised in one test because the cases share process-wide env state.
    let result = resolve_league_id(Some(LeagueId::new(36298)));
    assert_eq!(result.unwrap().as_u32(), 36298);

    std::env::set_var(LEAGUE_ID_ENV_VAR, "54321");
    let result = resolve_league_id(None);
    assert_eq!(result.unwrap().as_u32(), 54321);

    std::env::set_var(LEAGUE_ID_ENV_VAR, "not_a_number");
    let result = resolve_league_id(None);
    assert!(matches!(result, Err(FplError::InvalidId(_))));

    std::env::remove_var(LEAGUE_ID_ENV_VAR);
    let result = resolve_league_id(None);
    match result.unwrap_err() {
        FplError::MissingLeagueId { env_var } => assert_eq!(env_var, LEAGUE_ID_ENV_VAR),
        other => panic!("Expected MissingLeagueId error, got {other:?}"),
    }
}

#[test]
fn test_current_gameweek_latest_finished() {
    let details = sample_details();
    assert_eq!(current_gameweek(&details), Gameweek::new(2));
}

#[test]
fn test_current_gameweek_defaults_to_one() {
    let mut details = sample_details();
    for m in &mut details.matches {
        m.finished = false;
    }
    assert_eq!(current_gameweek(&details), Gameweek::new(1));
}

#[test]
fn test_entry_name_lookup() {
    let details = sample_details();
    assert_eq!(entry_name(&details, EntryId::new(101)), "Ian");
    assert_eq!(entry_name(&details, EntryId::new(102)), "Priya");
    // Unknown entries render as the raw ID
    assert_eq!(entry_name(&details, EntryId::new(999)), "999");
}

#[test]
fn test_gameweek_parse_bounds() {
    assert!("0".parse::<Gameweek>().is_err());
    assert!("39".parse::<Gameweek>().is_err());
    assert_eq!("38".parse::<Gameweek>().unwrap(), Gameweek::new(38));
}
