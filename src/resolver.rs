//! Parameter input dispatch.
//!
//! Entity references are not declared in the parameter schema; they are
//! inferred from the parameter name combined with the owning command's key,
//! because the same name means different things under different commands
//! (`itemId` under `giveItem` browses the global catalog, under `removeItem`
//! it browses one player's inventory). `resolve` is a pure lookup returning a
//! tagged variant; rendering and fetching are the caller's problem.

use std::collections::BTreeMap;

use crate::cache::CollectionKey;
use crate::model::{ParamKind, ParamSpec};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    Text { placeholder: Option<String> },
    Number { placeholder: Option<String> },
    Select { options: Vec<String> },
    PlayerPicker,
    ItemBrowser,
    InventoryBrowser { player_id: String },
    QuestBrowser { player_id: String },
    AchievementBrowser,
    LocationBrowser,
    EncounterBrowser,
    /// A player-scoped browser was requested before `playerId` was bound:
    /// render a blocking placeholder and fetch nothing.
    AwaitingPlayer,
}

impl InputSpec {
    /// The collection the caller must ensure-fetch before this input has
    /// anything to show.
    pub fn collection(&self) -> Option<CollectionKey> {
        match self {
            InputSpec::PlayerPicker => Some(CollectionKey::Players),
            InputSpec::ItemBrowser => Some(CollectionKey::Items),
            InputSpec::InventoryBrowser { player_id } => {
                Some(CollectionKey::Inventory(player_id.clone()))
            }
            InputSpec::QuestBrowser { player_id } => Some(CollectionKey::Quests(player_id.clone())),
            InputSpec::AchievementBrowser => Some(CollectionKey::Achievements),
            InputSpec::LocationBrowser => Some(CollectionKey::Locations),
            InputSpec::EncounterBrowser => Some(CollectionKey::Encounters),
            _ => None,
        }
    }

    /// True for inputs the console fills through a picker overlay rather than
    /// inline text entry.
    pub fn is_picker(&self) -> bool {
        self.collection().is_some() || matches!(self, InputSpec::AwaitingPlayer)
    }

    /// True when this input depends on the currently bound player.
    pub fn player_dependent(&self) -> bool {
        matches!(
            self,
            InputSpec::InventoryBrowser { .. }
                | InputSpec::QuestBrowser { .. }
                | InputSpec::AwaitingPlayer
        )
    }
}

/// Dispatch rules in priority order; first match wins. `params` is the
/// current value set of the selected command, consulted only for the bound
/// `playerId`.
pub fn resolve(
    command_key: &str,
    param: &ParamSpec,
    params: &BTreeMap<String, String>,
) -> InputSpec {
    let bound_player = params
        .get("playerId")
        .map(String::as_str)
        .filter(|id| !id.is_empty());

    match param.name.as_str() {
        "playerId" => InputSpec::PlayerPicker,
        "itemId" if command_key == "giveItem" => InputSpec::ItemBrowser,
        "itemId" if command_key == "removeItem" => match bound_player {
            Some(id) => InputSpec::InventoryBrowser {
                player_id: id.to_string(),
            },
            None => InputSpec::AwaitingPlayer,
        },
        "questId" => match bound_player {
            Some(id) => InputSpec::QuestBrowser {
                player_id: id.to_string(),
            },
            None => InputSpec::AwaitingPlayer,
        },
        "achievementId" => InputSpec::AchievementBrowser,
        "location" => InputSpec::LocationBrowser,
        "encounterId" => InputSpec::EncounterBrowser,
        _ => match param.kind {
            ParamKind::Text => InputSpec::Text {
                placeholder: param.placeholder.clone(),
            },
            ParamKind::Number => InputSpec::Number {
                placeholder: param.placeholder.clone(),
            },
            ParamKind::Select => InputSpec::Select {
                options: param.options.clone(),
            },
        },
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
