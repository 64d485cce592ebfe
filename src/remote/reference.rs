//! Reference-collection endpoints backing the pickers and previews.

use super::*;
use crate::model::{
    AchievementDef, EncounterDef, ItemDef, LocationDef, PlayerStats, PlayerSummary,
};

impl RemoteClient {
    fn get_reference<T: serde::de::DeserializeOwned>(
        &self,
        label: &str,
        path: &str,
        player_id: Option<&str>,
    ) -> Result<T> {
        with_retries(label, || {
            let mut req = self
                .client
                .get(self.url(path))
                .query(&[("channel", self.channel())])
                .header(reqwest::header::AUTHORIZATION, self.auth());
            if let Some(id) = player_id {
                req = req.query(&[("playerId", id)]);
            }
            let resp = req.send().with_context(|| format!("{} request", label))?;
            self.ensure_ok(resp, label)?
                .json()
                .with_context(|| format!("parse {}", label))
        })
    }

    pub fn players(&self) -> Result<Vec<PlayerSummary>> {
        let resp: PlayersResponse =
            self.get_reference("player roster", "/api/operator/players", None)?;
        Ok(resp.players)
    }

    /// Global item catalog, flattened from its slot-kind grouping.
    pub fn items(&self) -> Result<Vec<ItemDef>> {
        let resp: ItemsResponse =
            self.get_reference("item catalog", "/api/operator/data/items", None)?;
        let mut items = Vec::new();
        let mut groups: Vec<_> = resp.items.into_iter().collect();
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        for (slot, group) in groups {
            for mut item in group {
                if item.slot.is_empty() {
                    item.slot = slot.clone();
                }
                items.push(item);
            }
        }
        Ok(items)
    }

    pub fn player_inventory(&self, player_id: &str) -> Result<InventoryResponse> {
        self.get_reference(
            "player inventory",
            "/api/operator/data/player-inventory",
            Some(player_id),
        )
    }

    pub fn player_quests(&self, player_id: &str) -> Result<QuestsResponse> {
        self.get_reference(
            "player quests",
            "/api/operator/data/player-quests",
            Some(player_id),
        )
    }

    pub fn achievements(&self) -> Result<Vec<AchievementDef>> {
        let resp: AchievementsResponse = self.get_reference(
            "achievement catalog",
            "/api/operator/data/achievements",
            None,
        )?;
        Ok(resp.achievements)
    }

    pub fn locations(&self) -> Result<Vec<LocationDef>> {
        let resp: LocationsResponse =
            self.get_reference("location catalog", "/api/operator/data/locations", None)?;
        Ok(resp.locations)
    }

    pub fn encounters(&self) -> Result<Vec<EncounterDef>> {
        let resp: EncountersResponse =
            self.get_reference("encounter catalog", "/api/operator/data/encounters", None)?;
        Ok(resp.encounters)
    }

    pub fn player_stats(&self, player_id: &str) -> Result<PlayerStats> {
        let resp: StatsResponse = self.get_reference(
            "player stats",
            "/api/operator/data/player-stats",
            Some(player_id),
        )?;
        Ok(resp.stats)
    }
}
