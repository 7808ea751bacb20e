//! Command implementations for the FPL Draft CLI

pub mod fixtures;
pub mod owner;
pub mod roster;
pub mod scores;
pub mod standings;
pub mod waivers;

use crate::cli::types::{EntryId, Gameweek, LeagueId};
use crate::error::{FplError, Result};
use crate::fpl::types::LeagueDetails;
use crate::LEAGUE_ID_ENV_VAR;

/// Resolve the league ID from the CLI flag or the environment.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    match league_id {
        Some(id) => Ok(id),
        None => match std::env::var(LEAGUE_ID_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Err(FplError::MissingLeagueId {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            }),
        },
    }
}

/// Latest gameweek with a finished match, defaulting to gameweek 1 before
/// any match has finished.
pub fn current_gameweek(details: &LeagueDetails) -> Gameweek {
    details
        .matches
        .iter()
        .filter(|m| m.finished)
        .map(|m| m.event)
        .max()
        .map(Gameweek::new)
        .unwrap_or_default()
}

/// Display name for a league entry. The league labels teams by manager first
/// name; unknown IDs render as the raw number rather than erroring.
pub fn entry_name(details: &LeagueDetails, id: EntryId) -> String {
    details
        .league_entries
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.player_first_name.clone())
        .unwrap_or_else(|| id.to_string())
}
