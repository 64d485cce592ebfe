//! Core data model shared by the CLI, the console, and the remote client.

use serde::{Deserialize, Serialize};

/// Connection settings for the operator API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    pub token: String,
    pub channel: String,
}

/// Operator permission tier. Ordering is total: Creator outranks Streamer
/// outranks Moderator. The server enforces permissions; the client only uses
/// the tier for display grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessLevel {
    Moderator,
    Streamer,
    Creator,
}

impl AccessLevel {
    pub fn label(self) -> &'static str {
        match self {
            AccessLevel::Moderator => "Moderator",
            AccessLevel::Streamer => "Streamer",
            AccessLevel::Creator => "Creator",
        }
    }

    pub const ALL: [AccessLevel; 3] = [
        AccessLevel::Moderator,
        AccessLevel::Streamer,
        AccessLevel::Creator,
    ];
}

/// Result of the access-gate status check.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorStatus {
    pub has_access: bool,
    #[serde(default)]
    pub level: Option<AccessLevel>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
}

/// Declared primitive type of a command parameter. Entity references are not
/// declared on the wire; the resolver infers them from the parameter name and
/// the owning command key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Text,
    Number,
    Select,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// A privileged operation as served by the commands endpoint. Immutable for
/// the session once fetched. The `key` is injected from the response map when
/// the catalog is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: AccessLevel,
    #[serde(default)]
    pub dangerous: bool,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
}

/// Rarity ladder of the game's item system, lowest first. Orders the item
/// browser's rarity filter cycle.
pub const RARITIES: [&str; 6] = ["common", "uncommon", "rare", "epic", "legendary", "mythic"];

/// Equipment slot kinds recognized by the item browser filter.
pub const SLOT_KINDS: [&str; 5] = ["weapon", "armor", "trinket", "consumable", "material"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: String,
    pub name: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub rarity: String,
}

fn one() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuestEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub biome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncounterDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
}

/// Snapshot of a player's mutable numbers, used only for previews.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub name: String,
    #[serde(default)]
    pub character_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
}
