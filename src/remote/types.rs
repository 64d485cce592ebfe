//! Wire envelopes for the operator API.

use std::collections::HashMap;

use crate::model::{
    AchievementDef, ChannelInfo, CharacterInfo, Command, EncounterDef, InventoryEntry, ItemDef,
    LocationDef, PlayerStats, PlayerSummary, QuestEntry,
};

/// Error body returned by the API on rejection. Older server builds used
/// `detail`, newer ones `message`; accept either.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiError {
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .or(self.detail.as_deref())
            .unwrap_or("request rejected")
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct CommandsResponse {
    pub(super) commands: HashMap<String, Command>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct PlayersResponse {
    pub(super) players: Vec<PlayerSummary>,
}

/// The item catalog arrives grouped by slot kind. The group key wins over a
/// missing per-item slot field.
#[derive(Debug, serde::Deserialize)]
pub(super) struct ItemsResponse {
    pub(super) items: HashMap<String, Vec<ItemDef>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub inventory: Vec<InventoryEntry>,
    #[serde(default)]
    pub player_name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestsResponse {
    pub quests: Vec<QuestEntry>,
    #[serde(default)]
    pub player_name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct AchievementsResponse {
    pub(super) achievements: Vec<AchievementDef>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LocationsResponse {
    pub(super) locations: Vec<LocationDef>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct EncountersResponse {
    pub(super) encounters: Vec<EncounterDef>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct StatsResponse {
    pub(super) stats: PlayerStats,
}

#[derive(Debug, serde::Serialize)]
pub(super) struct ExecuteRequest {
    pub(super) channel: String,
    pub(super) command: String,
    pub(super) params: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ChannelsResponse {
    pub(super) channels: Vec<ChannelInfo>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct CharactersResponse {
    pub(super) characters: Vec<CharacterInfo>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeleteCharacterRequest {
    pub(super) channel: String,
    pub(super) player_id: String,
    pub(super) character_name: String,
}
