use crate::cli::types::{EntryId, PlayerId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// The live endpoint keys its `elements` map by player ID rendered as a string.
fn de_str_key_map_live<'de, D>(deserializer: D) -> Result<BTreeMap<PlayerId, ElementLive>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, ElementLive> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u32>()
                .map(|kk| (PlayerId::new(kk), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// Player record from `bootstrap-static`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub web_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    pub element_type: u8,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub goals_scored: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub clean_sheets: i64,
    #[serde(default)]
    pub bonus: i64,
    #[serde(default)]
    pub draft_rank: i64,
}

/// Position category (GKP, DEF, MID, FWD) from `bootstrap-static`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementType {
    pub id: u8,
    pub singular_name_short: String,
    #[serde(default)]
    pub plural_name: String,
}

/// Root we deserialize out of `bootstrap-static`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bootstrap {
    pub elements: Vec<Element>,
    pub element_types: Vec<ElementType>,
}

/// One fantasy team in the league, from `league/{id}/details`.
///
/// `id` is the league-scoped entry ID referenced by matches and standings;
/// `entry_id` is the global ID used by the picks endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueEntry {
    pub id: EntryId,
    pub entry_id: EntryId,
    #[serde(default)]
    pub entry_name: String,
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    #[serde(default)]
    pub short_name: String,
}

/// Head-to-head matchup between two league entries in one gameweek.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueMatch {
    pub event: u8,
    pub league_entry_1: EntryId,
    #[serde(default)]
    pub league_entry_1_points: i64,
    pub league_entry_2: EntryId,
    #[serde(default)]
    pub league_entry_2_points: i64,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
}

/// League table row from `league/{id}/details`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Standing {
    pub league_entry: EntryId,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub points_for: i64,
    #[serde(default)]
    pub points_against: i64,
    #[serde(default)]
    pub matches_won: u32,
    #[serde(default)]
    pub matches_drawn: u32,
    #[serde(default)]
    pub matches_lost: u32,
}

/// Root we deserialize out of `league/{id}/details`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueDetails {
    pub league_entries: Vec<LeagueEntry>,
    pub matches: Vec<LeagueMatch>,
    pub standings: Vec<Standing>,
}

/// Waiver/free-agent transaction from `draft/league/{id}/transactions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    pub entry: EntryId,
    pub element_in: PlayerId,
    pub element_out: PlayerId,
    pub event: u8,
    /// "w" = waiver, "f" = free agent.
    pub kind: String,
    /// "a" = accepted, "di"/"do" = denied.
    pub result: String,
}

/// Top-level envelope for the transactions endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

/// Player ownership record from `league/{id}/element-status`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementStatus {
    pub element: PlayerId,
    /// Absent for unowned free agents.
    #[serde(default)]
    pub owner: Option<EntryId>,
}

/// Top-level envelope for the element-status endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementStatusList {
    pub element_status: Vec<ElementStatus>,
}

/// One roster slot from `entry/{id}/event/{gw}`: squad positions 1-11 are the
/// starting XI, 12-15 the bench.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    pub position: u8,
}

/// Top-level envelope for the picks endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryEvent {
    pub picks: Vec<Pick>,
}

/// Per-player live statistics for a gameweek.
///
/// Stat names are kept as the API sends them ("total_points", "bonus", "bps",
/// ...). Values that are not integers (the API mixes in string-valued ICT
/// metrics and booleans) read as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ElementLive {
    #[serde(default)]
    pub stats: BTreeMap<String, Value>,
}

impl ElementLive {
    /// Integer statistic lookup; absent or non-integer values return `None`.
    pub fn stat(&self, name: &str) -> Option<i64> {
        self.stats.get(name).and_then(Value::as_i64)
    }
}

/// One (player, value) entry on a fixture stat category.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureStatValue {
    pub element: PlayerId,
    pub value: i64,
}

/// Per-category fixture statistics, split by side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureStat {
    #[serde(rename = "s")]
    pub stat: String,
    #[serde(rename = "h", default)]
    pub home: Vec<FixtureStatValue>,
    #[serde(rename = "a", default)]
    pub away: Vec<FixtureStatValue>,
}

/// One match in a gameweek, from `event/{gw}/live`.
///
/// Bonus is only computed from fixtures flagged `finished_provisional`: stats
/// final enough to rank, ahead of official confirmation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    #[serde(default)]
    pub started: bool,
    pub finished_provisional: bool,
    #[serde(default)]
    pub stats: Vec<FixtureStat>,
}

/// Computed team score for display
#[derive(Debug, Clone, Serialize)]
pub struct TeamScore {
    pub entry: EntryId,
    pub team_name: String,
    pub points: i64,
}

/// Root we deserialize out of `event/{gw}/live`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventLive {
    #[serde(deserialize_with = "de_str_key_map_live", default)]
    pub elements: BTreeMap<PlayerId, ElementLive>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}
