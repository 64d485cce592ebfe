//! Reference-data cache keyed by collection type and, where scoped, player id.
//!
//! Global collections (catalogs, roster) live for the console's lifetime.
//! Player-scoped collections are dropped on every `playerId` transition.
//! Fetches complete asynchronously; each in-flight request carries the id it
//! was started with, and a completion whose id no longer matches its slot is
//! dropped so late responses can never resurrect stale state.

use std::collections::HashMap;

use crate::model::{
    AchievementDef, EncounterDef, InventoryEntry, ItemDef, LocationDef, PlayerStats,
    PlayerSummary, QuestEntry,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Items,
    Players,
    Achievements,
    Locations,
    Encounters,
    Inventory(String),
    Quests(String),
    Stats(String),
}

impl CollectionKey {
    pub fn player_scoped(&self) -> bool {
        matches!(
            self,
            CollectionKey::Inventory(_) | CollectionKey::Quests(_) | CollectionKey::Stats(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionKey::Items => "item catalog",
            CollectionKey::Players => "player roster",
            CollectionKey::Achievements => "achievement catalog",
            CollectionKey::Locations => "location catalog",
            CollectionKey::Encounters => "encounter catalog",
            CollectionKey::Inventory(_) => "player inventory",
            CollectionKey::Quests(_) => "player quests",
            CollectionKey::Stats(_) => "player stats",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Collection {
    Items(Vec<ItemDef>),
    Players(Vec<PlayerSummary>),
    Achievements(Vec<AchievementDef>),
    Locations(Vec<LocationDef>),
    Encounters(Vec<EncounterDef>),
    Inventory(Vec<InventoryEntry>),
    Quests(Vec<QuestEntry>),
    Stats(PlayerStats),
}

#[derive(Clone, Debug)]
pub enum Slot {
    Loading { req: u64 },
    Loaded(Collection),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ReferenceCache {
    slots: HashMap<CollectionKey, Slot>,
    next_req: u64,
}

impl ReferenceCache {
    pub fn slot(&self, key: &CollectionKey) -> Option<&Slot> {
        self.slots.get(key)
    }

    pub fn loaded(&self, key: &CollectionKey) -> Option<&Collection> {
        match self.slots.get(key) {
            Some(Slot::Loaded(data)) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self, key: &CollectionKey) -> bool {
        matches!(self.slots.get(key), Some(Slot::Loading { .. }))
    }

    pub fn failure(&self, key: &CollectionKey) -> Option<&str> {
        match self.slots.get(key) {
            Some(Slot::Failed(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Fetch guard. Returns the request id to attach to a new fetch when the
    /// key has no slot yet; a slot that is already loading, loaded, or failed
    /// suppresses the fetch (no redundant in-flight requests, no hammering a
    /// failing endpoint).
    pub fn begin(&mut self, key: CollectionKey) -> Option<u64> {
        if self.slots.contains_key(&key) {
            return None;
        }
        self.next_req += 1;
        let req = self.next_req;
        self.slots.insert(key, Slot::Loading { req });
        Some(req)
    }

    /// Completion callback from a fetch. Applied only while the slot is still
    /// the same pending request; an evicted or superseded slot drops the
    /// response on the floor.
    pub fn complete(
        &mut self,
        key: &CollectionKey,
        req: u64,
        result: Result<Collection, String>,
    ) {
        match self.slots.get(key) {
            Some(Slot::Loading { req: pending }) if *pending == req => {}
            _ => return,
        }
        let slot = match result {
            Ok(data) => Slot::Loaded(data),
            Err(msg) => Slot::Failed(msg),
        };
        self.slots.insert(key.clone(), slot);
    }

    /// Drop every player-scoped slot. Called on every `playerId` transition,
    /// including to and from empty; in-flight scoped fetches die with their
    /// slots.
    pub fn invalidate_player_scoped(&mut self) {
        self.slots.retain(|key, _| !key.player_scoped());
    }

    /// Drop a single slot so the next `begin` refetches it.
    pub fn evict(&mut self, key: &CollectionKey) {
        self.slots.remove(key);
    }

    /// Drop a failed slot, allowing a manual retry. Loading and loaded slots
    /// are left alone.
    pub fn clear_failed(&mut self, key: &CollectionKey) {
        if matches!(self.slots.get(key), Some(Slot::Failed(_))) {
            self.slots.remove(key);
        }
    }

    pub fn players(&self) -> Option<&[PlayerSummary]> {
        match self.loaded(&CollectionKey::Players)? {
            Collection::Players(list) => Some(list),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[ItemDef]> {
        match self.loaded(&CollectionKey::Items)? {
            Collection::Items(list) => Some(list),
            _ => None,
        }
    }

    pub fn achievements(&self) -> Option<&[AchievementDef]> {
        match self.loaded(&CollectionKey::Achievements)? {
            Collection::Achievements(list) => Some(list),
            _ => None,
        }
    }

    pub fn locations(&self) -> Option<&[LocationDef]> {
        match self.loaded(&CollectionKey::Locations)? {
            Collection::Locations(list) => Some(list),
            _ => None,
        }
    }

    pub fn encounters(&self) -> Option<&[EncounterDef]> {
        match self.loaded(&CollectionKey::Encounters)? {
            Collection::Encounters(list) => Some(list),
            _ => None,
        }
    }

    pub fn inventory(&self, player_id: &str) -> Option<&[InventoryEntry]> {
        match self.loaded(&CollectionKey::Inventory(player_id.to_string()))? {
            Collection::Inventory(list) => Some(list),
            _ => None,
        }
    }

    pub fn quests(&self, player_id: &str) -> Option<&[QuestEntry]> {
        match self.loaded(&CollectionKey::Quests(player_id.to_string()))? {
            Collection::Quests(list) => Some(list),
            _ => None,
        }
    }

    pub fn stats(&self, player_id: &str) -> Option<&PlayerStats> {
        match self.loaded(&CollectionKey::Stats(player_id.to_string()))? {
            Collection::Stats(stats) => Some(stats),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
