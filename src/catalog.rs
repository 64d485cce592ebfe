//! Command catalog: category classification, tier grouping, and filtering.

use crate::model::{AccessLevel, Command};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Player,
    Economy,
    World,
    System,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Player => "Player",
            Category::Economy => "Economy",
            Category::World => "World",
            Category::System => "System",
        }
    }

    pub const ALL: [Category; 4] = [
        Category::Player,
        Category::Economy,
        Category::World,
        Category::System,
    ];
}

/// Closed classification table over known command keys. Categories are a
/// display taxonomy, not behavior; keeping this a literal table keeps
/// grouping deterministic when command descriptions get reworded. Keys the
/// table doesn't know land in Player.
pub fn classify(key: &str) -> Category {
    match key {
        "giveGold" | "removeGold" | "giveItem" | "removeItem" => Category::Economy,
        "teleportPlayer" | "spawnEncounter" | "resetDungeon" => Category::World,
        "broadcastMessage" | "reloadGameData" | "setMotd" => Category::System,
        "giveExp" | "setPlayerLevel" | "healPlayer" | "revivePlayer" | "resetQuest"
        | "unlockAchievement" => Category::Player,
        _ => Category::Player,
    }
}

/// Category filter for the catalog pane. `All` is the identity filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }

    pub fn next(self) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(cat) => {
                let ix = Category::ALL.iter().position(|c| *c == cat).unwrap_or(0);
                match Category::ALL.get(ix + 1) {
                    Some(next) => CategoryFilter::Only(*next),
                    None => CategoryFilter::All,
                }
            }
        }
    }
}

pub fn filter_by_category(commands: &[Command], filter: CategoryFilter) -> Vec<&Command> {
    match filter {
        CategoryFilter::All => commands.iter().collect(),
        CategoryFilter::Only(cat) => commands
            .iter()
            .filter(|cmd| classify(&cmd.key) == cat)
            .collect(),
    }
}

/// Partition by each command's own minimum tier, lowest tier first, keeping
/// input order inside a bucket. Empty buckets are omitted so the UI never
/// renders a heading with nothing under it.
pub fn group_by_level<'a>(commands: &[&'a Command]) -> Vec<(AccessLevel, Vec<&'a Command>)> {
    let mut out = Vec::new();
    for level in AccessLevel::ALL {
        let bucket: Vec<&Command> = commands
            .iter()
            .copied()
            .filter(|cmd| cmd.level == level)
            .collect();
        if !bucket.is_empty() {
            out.push((level, bucket));
        }
    }
    out
}

/// The permission-filtered command set for one channel, immutable once
/// loaded. A failed load leaves it empty rather than poisoning the console.
#[derive(Debug, Default)]
pub struct Catalog {
    commands: Vec<Command>,
}

impl Catalog {
    /// Build the catalog from a command payload. The payload is not trusted:
    /// commands above the operator's tier are dropped here, so a raw
    /// unfiltered response can never surface creator-only operations to a
    /// lower tier.
    pub fn new(commands: Vec<Command>, level: AccessLevel) -> Self {
        let commands = commands
            .into_iter()
            .filter(|cmd| cmd.level <= level)
            .collect();
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, key: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.key == key)
    }

    pub fn visible(&self, filter: CategoryFilter) -> Vec<&Command> {
        filter_by_category(&self.commands, filter)
    }

    pub fn grouped(&self, filter: CategoryFilter) -> Vec<(AccessLevel, Vec<&Command>)> {
        group_by_level(&self.visible(filter))
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
