//! State for the currently selected command: its parameter values, display
//! labels for picked entities, the last execution outcome, and the busy flag
//! serializing execution. Transitions are explicit so unrelated pieces of
//! state can't drift apart.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::model::{Command, ParamKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

#[derive(Debug, Default)]
pub struct Session {
    selected: Option<String>,
    values: BTreeMap<String, String>,
    labels: BTreeMap<String, String>,
    outcome: Option<Outcome>,
    busy: bool,
}

impl Session {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn label_for(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    pub fn player_id(&self) -> Option<&str> {
        self.value("playerId")
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Selecting a command always starts from a clean slate: params, labels,
    /// preview input, and any displayed result are gone, regardless of what
    /// the previous selection held. Reselecting the same command resets too.
    pub fn select(&mut self, key: &str) {
        self.selected = Some(key.to_string());
        self.values.clear();
        self.labels.clear();
        self.outcome = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.values.clear();
        self.labels.clear();
        self.outcome = None;
    }

    /// Set one parameter. Returns true when this changed the bound
    /// `playerId` (including to or from empty), which obligates the caller
    /// to invalidate player-scoped caches.
    pub fn set_value(&mut self, name: &str, value: String, label: Option<String>) -> bool {
        let player_changed = name == "playerId"
            && self.values.get(name).map(String::as_str).unwrap_or("") != value;
        if value.is_empty() {
            self.values.remove(name);
            self.labels.remove(name);
        } else {
            self.values.insert(name.to_string(), value);
            match label {
                Some(label) => {
                    self.labels.insert(name.to_string(), label);
                }
                None => {
                    self.labels.remove(name);
                }
            }
        }
        player_changed
    }

    /// Drop values that were picked against the previous player's scoped
    /// collections; they are meaningless for the new one.
    pub fn clear_player_dependent(&mut self, names: &[&str]) {
        for name in names {
            self.values.remove(*name);
            self.labels.remove(*name);
        }
    }

    /// Serialization guard: returns false (and does nothing) if an execution
    /// is already pending.
    pub fn execute_started(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.outcome = None;
        true
    }

    /// Success clears the selection and all parameters; failure preserves the
    /// form so the operator can correct and retry.
    pub fn execute_finished(&mut self, result: Result<String, String>) {
        self.busy = false;
        match result {
            Ok(message) => {
                self.selected = None;
                self.values.clear();
                self.labels.clear();
                self.outcome = Some(Outcome::Success(message));
            }
            Err(message) => {
                self.outcome = Some(Outcome::Failure(message));
            }
        }
    }

    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    pub fn missing_required<'a>(&self, command: &'a Command) -> Vec<&'a str> {
        command
            .params
            .iter()
            .filter(|p| p.required && self.value(&p.name).is_none())
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// Build the wire parameter map: number params are sent as JSON numbers,
/// everything else as strings. Unparseable numbers fall back to the raw
/// string and let the server reject them with its own message.
pub fn typed_params(
    command: &Command,
    values: &BTreeMap<String, String>,
) -> serde_json::Map<String, serde_json::Value> {
    let mut out = serde_json::Map::new();
    for param in &command.params {
        let Some(raw) = values.get(&param.name).filter(|v| !v.is_empty()) else {
            continue;
        };
        let value = match param.kind {
            ParamKind::Number => match raw.trim().parse::<i64>() {
                Ok(n) => serde_json::Value::from(n),
                Err(_) => serde_json::Value::from(raw.clone()),
            },
            _ => serde_json::Value::from(raw.clone()),
        };
        out.insert(param.name.clone(), value);
    }
    out
}

/// Parse `key=value` pairs against a command's declared parameters. A key
/// that matches no declared parameter is rejected, not silently dropped.
pub fn parse_param_pairs(command: &Command, pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("bad parameter {pair} (expected key=value)"))?;
        if !command.params.iter().any(|p| p.name == key) {
            let declared: Vec<&str> = command.params.iter().map(|p| p.name.as_str()).collect();
            anyhow::bail!(
                "unknown parameter {} for {} (declared: {})",
                key,
                command.key,
                declared.join(", ")
            );
        }
        values.insert(key.to_string(), value.to_string());
    }
    Ok(values)
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
