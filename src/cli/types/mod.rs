//! Type-safe wrappers for FPL Draft identifiers.

pub mod gameweek;
pub mod ids;

pub use gameweek::Gameweek;
pub use ids::{EntryId, LeagueId, PlayerId};
