//! Gameweek type for FPL scheduling rounds.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last scheduling round of an FPL season.
pub const MAX_GAMEWEEK: u8 = 38;

/// Type-safe wrapper for gameweek numbers (1-38).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u8);

impl Gameweek {
    pub fn new(gameweek: u8) -> Self {
        Self(gameweek)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let gameweek: u8 = s.parse()?;
        if gameweek == 0 || gameweek > MAX_GAMEWEEK {
            return Err(FplError::GameweekOutOfRange { gameweek });
        }
        Ok(Self(gameweek))
    }
}
