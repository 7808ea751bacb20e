//! Async client for the public FPL Draft API.
//!
//! The league endpoints used here are readable without a session, so there is
//! no login flow. Responses are cached in memory by request path; the typed
//! accessors deserialize out of the cached `Value`.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::types::{EntryId, Gameweek, LeagueId};
use crate::error::Result;
use crate::fpl::cache::ResponseCache;
use crate::fpl::types::{
    Bootstrap, ElementStatusList, EntryEvent, EventLive, LeagueDetails, TransactionList,
};

/// Base path for the FPL Draft API.
pub const DRAFT_BASE_URL: &str = "https://draft.premierleague.com/api";

pub struct FplClient {
    client: Client,
    base_url: String,
    cache: ResponseCache,
}

impl FplClient {
    pub fn new() -> Self {
        Self::with_base_url(DRAFT_BASE_URL)
    }

    /// Point the client at a different base URL (used by tests against a
    /// local server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cache: ResponseCache::default(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(serde_json::from_value(cached)?);
        }

        let url = format!("{}/{}", self.base_url, path);
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        self.cache.put(path.to_string(), value.clone());
        Ok(serde_json::from_value(value)?)
    }

    /// `bootstrap-static`: every player plus the position categories.
    pub async fn bootstrap(&self) -> Result<Bootstrap> {
        self.get_json("bootstrap-static").await
    }

    /// `league/{id}/details`: entries, head-to-head matches, standings.
    pub async fn league_details(&self, league_id: LeagueId) -> Result<LeagueDetails> {
        self.get_json(&format!("league/{league_id}/details")).await
    }

    /// `draft/league/{id}/transactions`: the waiver/free-agent feed.
    pub async fn transactions(&self, league_id: LeagueId) -> Result<TransactionList> {
        self.get_json(&format!("draft/league/{league_id}/transactions"))
            .await
    }

    /// `league/{id}/element-status`: which entry owns each player.
    pub async fn element_status(&self, league_id: LeagueId) -> Result<ElementStatusList> {
        self.get_json(&format!("league/{league_id}/element-status"))
            .await
    }

    /// `entry/{id}/event/{gw}`: one team's picks for a gameweek. Takes the
    /// global entry ID, not the league-scoped one.
    pub async fn entry_event(&self, entry: EntryId, gameweek: Gameweek) -> Result<EntryEvent> {
        self.get_json(&format!("entry/{entry}/event/{gameweek}"))
            .await
    }

    /// `event/{gw}/live`: per-player live statistics and fixtures for a
    /// gameweek.
    pub async fn event_live(&self, gameweek: Gameweek) -> Result<EventLive> {
        self.get_json(&format!("event/{gameweek}/live")).await
    }
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}
