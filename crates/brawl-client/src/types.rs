//! Records returned by the Brawl Stars API.
//!
//! Field names follow the wire format (camelCase). Most fields are
//! defaulted so that records still decode when the server omits them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────────────────────────────────────

/// Profile icon reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon ID.
    pub id: u64,
}

/// A star power, gadget or gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    /// Item ID.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// Paged list wrapper used by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursors for the neighbouring pages.
    #[serde(default)]
    pub paging: Paging,
}

/// Paging information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
}

/// Opaque paging cursors, passed back verbatim as `before`/`after`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Players
// ─────────────────────────────────────────────────────────────────────────────

/// Player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub tag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub trophies: u64,
    #[serde(default)]
    pub highest_trophies: u64,
    #[serde(default)]
    pub exp_level: u32,
    #[serde(default)]
    pub exp_points: u64,
    #[serde(default)]
    pub is_qualified_from_championship_challenge: bool,
    /// Wins in 3 vs 3 modes. Sent by the server as `3vs3Victories`.
    #[serde(rename = "3vs3Victories", default)]
    pub three_vs_three_victories: u64,
    #[serde(default)]
    pub solo_victories: u64,
    #[serde(default)]
    pub duo_victories: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_robo_rumble_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_as_big_brawler: Option<u64>,
    /// Club membership; the server sends an empty object for club-less players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<PlayerClub>,
    #[serde(default)]
    pub brawlers: Vec<PlayerBrawler>,
    /// Fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Club summary embedded in a player profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerClub {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PlayerClub {
    /// Whether this is the empty placeholder for club-less players.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.name.is_none()
    }
}

/// A brawler as owned by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBrawler {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub trophies: u64,
    #[serde(default)]
    pub highest_trophies: u64,
    #[serde(default)]
    pub star_powers: Vec<Accessory>,
    #[serde(default)]
    pub gadgets: Vec<Accessory>,
    #[serde(default)]
    pub gears: Vec<Accessory>,
}

/// One battle in a player's battle log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogEntry {
    /// Battle time in the API's compact ISO 8601 form.
    pub battle_time: String,
    #[serde(default)]
    pub event: BattleEvent,
    /// Battle details; the shape varies with the game mode.
    #[serde(default)]
    pub battle: Value,
}

/// Event reference inside a battle log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Clubs
// ─────────────────────────────────────────────────────────────────────────────

/// Club profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub tag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Join policy: `open`, `inviteOnly` or `closed`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub club_type: Option<String>,
    #[serde(default)]
    pub badge_id: u64,
    #[serde(default)]
    pub required_trophies: u64,
    #[serde(default)]
    pub trophies: u64,
    #[serde(default)]
    pub members: Vec<ClubMember>,
}

/// Member of a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    pub tag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
    /// `member`, `senior`, `vicePresident` or `president`.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub trophies: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Rankings
// ─────────────────────────────────────────────────────────────────────────────

/// Entry in a player (or per-brawler) leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    pub tag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub trophies: u64,
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<RankingClub>,
}

/// Club name shown next to a ranked player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingClub {
    pub name: String,
}

/// Entry in a club leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRanking {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub badge_id: u64,
    #[serde(default)]
    pub trophies: u64,
    pub rank: u32,
    #[serde(default)]
    pub member_count: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Brawlers
// ─────────────────────────────────────────────────────────────────────────────

/// Brawler catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brawler {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub star_powers: Vec<Accessory>,
    #[serde(default)]
    pub gadgets: Vec<Accessory>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// A slot in the event rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<u32>,
    pub event: Event,
}

/// Event running in a rotation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

/// Game mode identifiers used by events and battles.
///
/// Modes added to the game after this list was written decode as
/// [`GameMode::Unknown`] with the wire name preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameMode {
    GemGrab,
    BrawlBall,
    Heist,
    Bounty,
    Siege,
    HotZone,
    Knockout,
    SoloShowdown,
    DuoShowdown,
    TrioShowdown,
    Duels,
    Wipeout,
    Payload,
    BasketBrawl,
    VolleyBrawl,
    Hunters,
    PresentPlunder,
    HoldTheTrophy,
    TrophyThieves,
    RoboRumble,
    BossFight,
    BigGame,
    LastStand,
    Unknown(String),
}

impl GameMode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &str {
        match self {
            GameMode::GemGrab => "gemGrab",
            GameMode::BrawlBall => "brawlBall",
            GameMode::Heist => "heist",
            GameMode::Bounty => "bounty",
            GameMode::Siege => "siege",
            GameMode::HotZone => "hotZone",
            GameMode::Knockout => "knockout",
            GameMode::SoloShowdown => "soloShowdown",
            GameMode::DuoShowdown => "duoShowdown",
            GameMode::TrioShowdown => "trioShowdown",
            GameMode::Duels => "duels",
            GameMode::Wipeout => "wipeout",
            GameMode::Payload => "payload",
            GameMode::BasketBrawl => "basketBrawl",
            GameMode::VolleyBrawl => "volleyBrawl",
            GameMode::Hunters => "hunters",
            GameMode::PresentPlunder => "presentPlunder",
            GameMode::HoldTheTrophy => "holdTheTrophy",
            GameMode::TrophyThieves => "trophyThieves",
            GameMode::RoboRumble => "roboRumble",
            GameMode::BossFight => "bossFight",
            GameMode::BigGame => "bigGame",
            GameMode::LastStand => "lastStand",
            GameMode::Unknown(name) => name,
        }
    }
}

impl From<String> for GameMode {
    fn from(name: String) -> Self {
        match name.as_str() {
            "gemGrab" => GameMode::GemGrab,
            "brawlBall" => GameMode::BrawlBall,
            "heist" => GameMode::Heist,
            "bounty" => GameMode::Bounty,
            "siege" => GameMode::Siege,
            "hotZone" => GameMode::HotZone,
            "knockout" => GameMode::Knockout,
            "soloShowdown" => GameMode::SoloShowdown,
            "duoShowdown" => GameMode::DuoShowdown,
            "trioShowdown" => GameMode::TrioShowdown,
            "duels" => GameMode::Duels,
            "wipeout" => GameMode::Wipeout,
            "payload" => GameMode::Payload,
            "basketBrawl" => GameMode::BasketBrawl,
            "volleyBrawl" => GameMode::VolleyBrawl,
            "hunters" => GameMode::Hunters,
            "presentPlunder" => GameMode::PresentPlunder,
            "holdTheTrophy" => GameMode::HoldTheTrophy,
            "trophyThieves" => GameMode::TrophyThieves,
            "roboRumble" => GameMode::RoboRumble,
            "bossFight" => GameMode::BossFight,
            "bigGame" => GameMode::BigGame,
            "lastStand" => GameMode::LastStand,
            _ => GameMode::Unknown(name),
        }
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
