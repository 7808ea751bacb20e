//! FPL Draft League CLI Library
//!
//! A Rust library for interacting with the Fantasy Premier League Draft API,
//! providing live matchday scoring, league standings, fixtures, rosters, and
//! the waiver transaction feed.
//!
//! ## Features
//!
//! - **Live Scoring**: Reconstruct each team's gameweek total from raw player
//!   statistics, including the tie-aware bonus-points ranking
//! - **League Data**: Standings, head-to-head fixtures, and team rosters
//!   joined from the Draft API payloads
//! - **Waiver Feed**: Transaction history with team and player names resolved
//! - **In-memory Caching**: API responses cached per process run, no
//!   persistence
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_draft::{Gameweek, LeagueId, commands::scores::handle_scores};
//!
//! # async fn example() -> fpl_draft::Result<()> {
//! // Print live scores for gameweek 5
//! handle_scores(Some(LeagueId::new(36298)), Some(Gameweek::new(5)), false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_DRAFT_LEAGUE_ID=36298
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fpl;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{EntryId, Gameweek, LeagueId, PlayerId};
pub use error::{FplError, Result};
pub use scoring::GameweekSnapshot;

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_DRAFT_LEAGUE_ID";
