//! Error types for the FPL Draft CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse numeric identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("League entry not found: {entry}")]
    EntryNotFound { entry: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Gameweek {gameweek} is out of range (1-38)")]
    GameweekOutOfRange { gameweek: u8 },
}
