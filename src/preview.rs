//! Pre-execution previews: a client-computed, non-authoritative projection of
//! a command's effect, recomputed on every parameter change and never sent to
//! the server. Partial input yields `None`, not an error.

use std::collections::BTreeMap;

use crate::cache::ReferenceCache;

pub fn preview(
    command_key: &str,
    params: &BTreeMap<String, String>,
    cache: &ReferenceCache,
) -> Option<String> {
    let player = nonempty(params, "playerId");

    match command_key {
        "giveGold" => {
            let stats = cache.stats(player?)?;
            let amount = parse_i64(params, "amount")?;
            Some(format!(
                "Gold {} -> {}",
                stats.gold,
                stats.gold.saturating_add(amount)
            ))
        }
        // Clamped at zero by policy: the server enforces its own floor, but
        // the operator should never be shown a negative projection.
        "removeGold" => {
            let stats = cache.stats(player?)?;
            let amount = parse_i64(params, "amount")?;
            Some(format!(
                "Gold {} -> {}",
                stats.gold,
                stats.gold.saturating_sub(amount).max(0)
            ))
        }
        // Flat xp delta only; level-up thresholds are the server's call.
        "giveExp" => {
            let stats = cache.stats(player?)?;
            let amount = parse_i64(params, "amount")?;
            Some(format!(
                "Level {}, XP {} -> {}",
                stats.level,
                stats.xp,
                stats.xp.saturating_add(amount)
            ))
        }
        // No monotonicity check; whether a downgrade is allowed is decided
        // server-side.
        "setPlayerLevel" => {
            let stats = cache.stats(player?)?;
            let target = parse_i64(params, "level")?;
            Some(format!("Level {} -> {}", stats.level, target))
        }
        "teleportPlayer" => {
            let stats = cache.stats(player?)?;
            let target = nonempty(params, "location")?;
            let label = cache
                .locations()
                .and_then(|list| list.iter().find(|loc| loc.id == target))
                .map(|loc| loc.name.clone())
                .unwrap_or_else(|| target.to_string());
            Some(format!("Location {} -> {}", stats.location, label))
        }
        "resetQuest" => {
            let quest_id = nonempty(params, "questId")?;
            let quests = cache.quests(player?)?;
            let quest = quests.iter().find(|q| q.id == quest_id)?;
            Some(format!("Reset quest \"{}\"", quest.name))
        }
        "unlockAchievement" => {
            let id = nonempty(params, "achievementId")?;
            let ach = cache.achievements()?.iter().find(|a| a.id == id)?;
            Some(format!("Unlock \"{}\"", ach.name))
        }
        "spawnEncounter" => {
            let id = nonempty(params, "encounterId")?;
            let enc = cache.encounters()?.iter().find(|e| e.id == id)?;
            Some(format!("Spawn \"{}\"", enc.name))
        }
        "giveItem" => {
            let id = nonempty(params, "itemId")?;
            let quantity = parse_i64(params, "quantity")?;
            let item = cache.items()?.iter().find(|i| i.id == id)?;
            Some(format!("+{} x {}", quantity, item.name))
        }
        "removeItem" => {
            let id = nonempty(params, "itemId")?;
            let quantity = parse_i64(params, "quantity")?;
            let entry = cache.inventory(player?)?.iter().find(|e| e.id == id)?;
            let remaining = i64::from(entry.quantity).saturating_sub(quantity);
            Some(format!(
                "-{} x {} ({} remaining)",
                quantity,
                entry.name,
                remaining.max(0)
            ))
        }
        _ => None,
    }
}

fn nonempty<'a>(params: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

fn parse_i64(params: &BTreeMap<String, String>, name: &str) -> Option<i64> {
    nonempty(params, name)?.trim().parse().ok()
}

#[cfg(test)]
#[path = "tests/preview_tests.rs"]
mod tests;
