//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Gameweek, LeagueId};

/// Common arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League ID (or set `FPL_DRAFT_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Compute live scores for a gameweek from raw player statistics.
    ///
    /// Reconstructs each team's total from its starting XI, including
    /// recomputed bonus points for provisionally finished fixtures.
    Scores {
        #[clap(flatten)]
        common: CommonArgs,

        /// Gameweek to score (defaults to the latest finished gameweek).
        #[clap(long, short)]
        gameweek: Option<Gameweek>,
    },

    /// Show the league table.
    Standings {
        #[clap(flatten)]
        common: CommonArgs,

        /// Order by total points scored rather than head-to-head record.
        #[clap(long)]
        points_for: bool,
    },

    /// Show head-to-head matchups for a gameweek.
    Fixtures {
        #[clap(flatten)]
        common: CommonArgs,

        /// Gameweek to show (defaults to the latest finished gameweek).
        #[clap(long, short)]
        gameweek: Option<Gameweek>,
    },

    /// Find the owning team for a named player.
    Owner {
        #[clap(flatten)]
        common: CommonArgs,

        /// Player name (case-insensitive substring of web or full name).
        #[clap(long, short)]
        player: String,
    },

    /// Show every team's current squad with season statistics.
    Roster {
        #[clap(flatten)]
        common: CommonArgs,

        /// Filter to one team by manager name (substring match).
        #[clap(long, short)]
        team: Option<String>,
    },

    /// Show the waiver and free-agent transaction feed.
    Waivers {
        #[clap(flatten)]
        common: CommonArgs,

        /// Only show transactions for this gameweek.
        #[clap(long, short)]
        gameweek: Option<Gameweek>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-draft", about = "FPL Draft league CLI")]
pub struct FplDraft {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the FPL Draft API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
