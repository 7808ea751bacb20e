//! End-to-end scoring tests against API-shaped payloads

use fpl_draft::{
    fpl::types::{EntryEvent, EventLive},
    scoring::{bonus_awards, resolve_active, GameweekSnapshot},
    EntryId, Gameweek, PlayerId,
};
use serde_json::json;
use std::collections::BTreeMap;

/// One finished fixture where player 2 is tied for the BPS lead, plus an
/// unfinished fixture whose stats must not count.
fn sample_live() -> EventLive {
    serde_json::from_value(json!({
        "elements": {
            "1": { "stats": { "total_points": 5, "bonus": 0, "bps": 20 } },
            "2": { "stats": { "total_points": 8, "bonus": 3, "bps": 32 } },
            "8": { "stats": { "total_points": 9, "bonus": 3, "bps": 32 } },
            "9": { "stats": { "total_points": 12, "bonus": 0, "bps": 40 } }
        },
        "fixtures": [
            {
                "started": true,
                "finished_provisional": true,
                "stats": [
                    {
                        "s": "bps",
                        "h": [ { "element": 2, "value": 32 }, { "element": 8, "value": 32 } ],
                        "a": [ { "element": 1, "value": 20 } ]
                    }
                ]
            },
            {
                "started": true,
                "finished_provisional": false,
                "stats": [
                    {
                        "s": "bps",
                        "h": [ { "element": 9, "value": 40 } ],
                        "a": []
                    }
                ]
            }
        ]
    }))
    .unwrap()
}

fn sample_snapshot() -> GameweekSnapshot {
    let live = sample_live();

    let picks: EntryEvent = serde_json::from_value(json!({
        "picks": [
            { "element": 1, "position": 1 },
            { "element": 2, "position": 9 },
            { "element": 9, "position": 12 }
        ]
    }))
    .unwrap();

    let mut rosters = BTreeMap::new();
    rosters.insert(EntryId::new(101), picks.picks);

    GameweekSnapshot::new(
        Gameweek::new(5),
        vec![EntryId::new(101)],
        rosters,
        live.elements,
        live.fixtures,
    )
}

#[test]
fn test_score_team_end_to_end() {
    let snapshot = sample_snapshot();

    // Active: players 1 and 2 (player 9 is benched).
    // Base: 5 + (8 - 3) = 10. Bonus: player 2 tied for rank 0 earns 3.
    // Player 9's 40 BPS sits in an unfinished fixture and awards nothing.
    assert_eq!(snapshot.score_team(EntryId::new(101)), 13);
}

#[test]
fn test_score_all_matches_score_team() {
    let snapshot = sample_snapshot();
    let all = snapshot.score_all();
    assert_eq!(all, vec![(EntryId::new(101), 13)]);
}

#[test]
fn test_resolve_active_from_api_picks() {
    let picks: EntryEvent = serde_json::from_value(json!({
        "picks": [
            { "element": 1, "position": 11 },
            { "element": 2, "position": 12 },
            { "element": 3, "position": 15 }
        ]
    }))
    .unwrap();

    let active = resolve_active(&picks.picks);
    assert_eq!(active.len(), 1);
    assert!(active.contains(&PlayerId::new(1)));
}

#[test]
fn test_bonus_from_deserialized_fixture() {
    let live = sample_live();

    let awards = bonus_awards(&live.fixtures[0]);
    // Two tied leaders at 32 share bonus 3; player 1 at rank 2 earns tier 1
    assert_eq!(awards.len(), 3);
    let bonus_for = |id: u32| {
        awards
            .iter()
            .find(|(player, _)| *player == PlayerId::new(id))
            .map(|&(_, bonus)| bonus)
    };
    assert_eq!(bonus_for(2), Some(3));
    assert_eq!(bonus_for(8), Some(3));
    assert_eq!(bonus_for(1), Some(1));

    // The unfinished fixture awards nothing regardless of its BPS values
    assert!(bonus_awards(&live.fixtures[1]).is_empty());
}
