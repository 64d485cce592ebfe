//! Picker overlay state and the pure row builders behind each browser
//! strategy. Filters are AND-combined: an item must match the text query,
//! the rarity filter, and the slot filter simultaneously.

use crate::cache::{Collection, CollectionKey};
use crate::model::{
    AchievementDef, EncounterDef, InventoryEntry, ItemDef, LocationDef, PlayerSummary, QuestEntry,
    RARITIES, SLOT_KINDS,
};

use super::input::Input;

#[derive(Debug)]
pub(super) struct Picker {
    /// Parameter the chosen value is written into.
    pub(super) param: String,
    pub(super) key: CollectionKey,
    pub(super) query: Input,
    /// Index into [`RARITIES`]; only meaningful for the item browser.
    pub(super) rarity: Option<usize>,
    /// Index into [`SLOT_KINDS`]; only meaningful for the item browser.
    pub(super) slot: Option<usize>,
    pub(super) selected: usize,
}

impl Picker {
    pub(super) fn new(param: &str, key: CollectionKey) -> Self {
        Self {
            param: param.to_string(),
            key,
            query: Input::default(),
            rarity: None,
            slot: None,
            selected: 0,
        }
    }

    pub(super) fn rarity_filter(&self) -> Option<&'static str> {
        self.rarity.map(|ix| RARITIES[ix % RARITIES.len()])
    }

    pub(super) fn slot_filter(&self) -> Option<&'static str> {
        self.slot.map(|ix| SLOT_KINDS[ix % SLOT_KINDS.len()])
    }

    pub(super) fn cycle_rarity(&mut self) {
        self.rarity = match self.rarity {
            None => Some(0),
            Some(ix) if ix + 1 < RARITIES.len() => Some(ix + 1),
            Some(_) => None,
        };
        self.selected = 0;
    }

    pub(super) fn cycle_slot(&mut self) {
        self.slot = match self.slot {
            None => Some(0),
            Some(ix) if ix + 1 < SLOT_KINDS.len() => Some(ix + 1),
            Some(_) => None,
        };
        self.selected = 0;
    }

    pub(super) fn rows(&self, collection: &Collection) -> Vec<PickerRow> {
        rows(
            collection,
            &self.query.buf,
            self.rarity_filter(),
            self.slot_filter(),
        )
    }
}

/// One selectable line in a picker: the raw value written into the param and
/// the label/detail shown to the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct PickerRow {
    pub(super) value: String,
    pub(super) label: String,
    pub(super) detail: String,
}

fn matches(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

pub(super) fn player_rows(players: &[PlayerSummary], query: &str) -> Vec<PickerRow> {
    players
        .iter()
        .filter(|p| matches(&p.name, query) || matches(&p.id, query))
        .map(|p| PickerRow {
            value: p.id.clone(),
            label: p.name.clone(),
            detail: format!("lv{} · {}", p.level, p.id),
        })
        .collect()
}

pub(super) fn item_rows(
    items: &[ItemDef],
    query: &str,
    rarity: Option<&str>,
    slot: Option<&str>,
) -> Vec<PickerRow> {
    items
        .iter()
        .filter(|i| matches(&i.name, query))
        .filter(|i| rarity.is_none_or(|r| i.rarity.eq_ignore_ascii_case(r)))
        .filter(|i| slot.is_none_or(|s| i.slot.eq_ignore_ascii_case(s)))
        .map(|i| PickerRow {
            value: i.id.clone(),
            label: i.name.clone(),
            detail: format!("{} · {}", i.rarity, i.slot),
        })
        .collect()
}

pub(super) fn inventory_rows(entries: &[InventoryEntry], query: &str) -> Vec<PickerRow> {
    entries
        .iter()
        .filter(|e| matches(&e.name, query))
        .map(|e| PickerRow {
            value: e.id.clone(),
            label: e.name.clone(),
            detail: format!("x{} · {}", e.quantity, e.rarity),
        })
        .collect()
}

pub(super) fn quest_rows(quests: &[QuestEntry], query: &str) -> Vec<PickerRow> {
    quests
        .iter()
        .filter(|q| matches(&q.name, query))
        .map(|q| PickerRow {
            value: q.id.clone(),
            label: q.name.clone(),
            detail: q.status.clone(),
        })
        .collect()
}

pub(super) fn achievement_rows(achievements: &[AchievementDef], query: &str) -> Vec<PickerRow> {
    achievements
        .iter()
        .filter(|a| matches(&a.name, query) || matches(&a.description, query))
        .map(|a| PickerRow {
            value: a.id.clone(),
            label: a.name.clone(),
            detail: a.description.clone(),
        })
        .collect()
}

/// Locations are presented grouped by biome (stable sort: biome, then name);
/// the query matches across both name and biome.
pub(super) fn location_rows(locations: &[LocationDef], query: &str) -> Vec<PickerRow> {
    let mut rows: Vec<&LocationDef> = locations
        .iter()
        .filter(|l| matches(&l.name, query) || matches(&l.biome, query))
        .collect();
    rows.sort_by(|a, b| a.biome.cmp(&b.biome).then_with(|| a.name.cmp(&b.name)));
    rows.into_iter()
        .map(|l| PickerRow {
            value: l.id.clone(),
            label: l.name.clone(),
            detail: l.biome.clone(),
        })
        .collect()
}

pub(super) fn encounter_rows(encounters: &[EncounterDef], query: &str) -> Vec<PickerRow> {
    encounters
        .iter()
        .filter(|e| matches(&e.name, query))
        .map(|e| PickerRow {
            value: e.id.clone(),
            label: e.name.clone(),
            detail: format!("lv{}", e.level),
        })
        .collect()
}

pub(super) fn rows(
    collection: &Collection,
    query: &str,
    rarity: Option<&str>,
    slot: Option<&str>,
) -> Vec<PickerRow> {
    match collection {
        Collection::Players(list) => player_rows(list, query),
        Collection::Items(list) => item_rows(list, query, rarity, slot),
        Collection::Inventory(list) => inventory_rows(list, query),
        Collection::Quests(list) => quest_rows(list, query),
        Collection::Achievements(list) => achievement_rows(list, query),
        Collection::Locations(list) => location_rows(list, query),
        Collection::Encounters(list) => encounter_rows(list, query),
        Collection::Stats(_) => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../tests/picker_tests.rs"]
mod tests;
