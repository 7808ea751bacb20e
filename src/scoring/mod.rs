//! Matchday scoring engine.
//!
//! Reconstructs each fantasy team's score for one gameweek from raw per-player
//! live statistics: resolve the starting XI, sum base live points with the
//! already-baked-in bonus stripped out, then re-award bonus per fixture from
//! the BPS ranking. Bonus is recomputed (rather than read from the live
//! `bonus` stat) so that provisionally finished fixtures score correctly
//! before the official bonus lands.
//!
//! The engine is a pure computation over an immutable [`GameweekSnapshot`];
//! callers fetch all inputs for the same gameweek up front and may score
//! teams concurrently.

use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::{EntryId, Gameweek, PlayerId};
use crate::fpl::types::{ElementLive, Fixture, Pick};


/// Squad positions below this are the starting XI; 12-15 are the bench.
pub const STARTING_XI_CUTOFF: u8 = 12;

/// Bonus awarded per rank position, best first.
pub const BONUS_TIERS: [i64; 4] = [3, 2, 1, 0];

/// Only the top entries by BPS are considered per fixture; ties beyond this
/// cannot reach a scoring tier.
pub const BONUS_CANDIDATES: usize = 10;

pub const STAT_TOTAL_POINTS: &str = "total_points";
pub const STAT_BONUS: &str = "bonus";
pub const STAT_BPS: &str = "bps";

/// Read-only inputs for scoring one gameweek.
///
/// Built by the caller from data fetched for a single gameweek; mixing
/// gameweeks in one snapshot is a precondition violation the engine does not
/// detect. Entry order is preserved by [`GameweekSnapshot::score_all`], so
/// callers should supply entries in the order they want results rendered
/// (typically league standings order).
#[derive(Debug, Clone)]
pub struct GameweekSnapshot {
    gameweek: Gameweek,
    entries: Vec<EntryId>,
    rosters: BTreeMap<EntryId, Vec<Pick>>,
    live: BTreeMap<PlayerId, ElementLive>,
    fixtures: Vec<Fixture>,
}

impl GameweekSnapshot {
    pub fn new(
        gameweek: Gameweek,
        entries: Vec<EntryId>,
        rosters: BTreeMap<EntryId, Vec<Pick>>,
        live: BTreeMap<PlayerId, ElementLive>,
        fixtures: Vec<Fixture>,
    ) -> Self {
        Self {
            gameweek,
            entries,
            rosters,
            live,
            fixtures,
        }
    }

    pub fn gameweek(&self) -> Gameweek {
        self.gameweek
    }

    pub fn entries(&self) -> &[EntryId] {
        &self.entries
    }

    /// Total score for one team: base live points of the starting XI plus
    /// freshly computed bonus. An entry with no roster in the snapshot scores
    /// zero.
    pub fn score_team(&self, entry: EntryId) -> i64 {
        let active = self
            .rosters
            .get(&entry)
            .map(|roster| resolve_active(roster))
            .unwrap_or_default();

        base_points(&active, &self.live) + compute_bonus(&self.fixtures, &active)
    }

    /// Score every entry, preserving the snapshot's entry order.
    pub fn score_all(&self) -> Vec<(EntryId, i64)> {
        self.entries
            .par_iter()
            .map(|&entry| (entry, self.score_team(entry)))
            .collect()
    }
}

/// Starting XI of a roster: picks with squad position below the bench cutoff.
/// An empty roster resolves to an empty set.
pub fn resolve_active(roster: &[Pick]) -> BTreeSet<PlayerId> {
    roster
        .iter()
        .filter(|pick| pick.position < STARTING_XI_CUTOFF)
        .map(|pick| pick.element)
        .collect()
}

/// Sum of each active player's live points with the bonus component removed
/// (bonus is re-awarded separately and must not be double-counted).
///
/// Players with no live statistics contribute zero; missing data never aborts
/// the aggregation for the rest of the side.
pub fn base_points(active: &BTreeSet<PlayerId>, live: &BTreeMap<PlayerId, ElementLive>) -> i64 {
    active
        .iter()
        .map(|player| match live.get(player) {
            Some(element) => {
                element.stat(STAT_TOTAL_POINTS).unwrap_or(0) - element.stat(STAT_BONUS).unwrap_or(0)
            }
            None => 0,
        })
        .sum()
}

/// Bonus awards for one fixture: `(player, bonus)` pairs for every player who
/// earns a non-zero bonus.
///
/// Fixtures not yet provisionally finished award nothing. Otherwise the home
/// and away BPS entries are pooled, sorted descending, and capped at
/// [`BONUS_CANDIDATES`]. Tiers are assigned in two passes: first each rank
/// position gets its tier from [`BONUS_TIERS`], then a forward-fill pass
/// copies the previous entry's award wherever BPS values are equal, so ties
/// share the better rank's reward. The walk stops at the first non-tied entry
/// past the scoring tiers. The first entry has no predecessor and is never
/// treated as tied.
pub fn bonus_awards(fixture: &Fixture) -> Vec<(PlayerId, i64)> {
    if !fixture.finished_provisional {
        return Vec::new();
    }

    let mut ranked: Vec<(PlayerId, i64)> = fixture
        .stats
        .iter()
        .filter(|stat| stat.stat == STAT_BPS)
        .flat_map(|stat| stat.home.iter().chain(stat.away.iter()))
        .map(|entry| (entry.element, entry.value))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(BONUS_CANDIDATES);

    // Pass 1: tier by rank position, ignoring ties.
    let mut awarded: Vec<i64> = (0..ranked.len())
        .map(|rank| BONUS_TIERS[rank.min(BONUS_TIERS.len() - 1)])
        .collect();

    // Pass 2: forward-fill ties, then stop once a non-tied entry falls past
    // the last scoring tier.
    let mut cutoff = ranked.len();
    for rank in 1..ranked.len() {
        if ranked[rank].1 == ranked[rank - 1].1 {
            awarded[rank] = awarded[rank - 1];
        } else if awarded[rank] == 0 {
            cutoff = rank;
            break;
        }
    }

    ranked
        .into_iter()
        .zip(awarded)
        .take(cutoff)
        .map(|((player, _), bonus)| (player, bonus))
        .collect()
}

/// Total bonus earned by the given player set across all fixtures of the
/// gameweek.
pub fn compute_bonus(fixtures: &[Fixture], active: &BTreeSet<PlayerId>) -> i64 {
    fixtures
        .iter()
        .flat_map(bonus_awards)
        .filter(|(player, _)| active.contains(player))
        .map(|(_, bonus)| bonus)
        .sum()
}
