use crate::cache::CollectionKey;
use crate::catalog::Catalog;
use crate::model::{AccessLevel, Command};
use crate::resolver::{self, InputSpec};
use crate::session::Outcome;

use super::fetch::FetchMsg;
use super::*;

impl App {
    /// Commands visible under the current category filter, in display order.
    /// The cursor indexes into this list.
    pub(in crate::console) fn visible(&self) -> Vec<&Command> {
        self.catalog.visible(self.category)
    }

    pub(in crate::console) fn selected_command(&self) -> Option<&Command> {
        self.catalog.get(self.session.selected()?)
    }

    /// Input strategy for one of the selected command's parameters.
    pub(in crate::console) fn param_spec(&self, ix: usize) -> Option<(&Command, InputSpec)> {
        let command = self.selected_command()?;
        let param = command.params.get(ix)?;
        let spec = resolver::resolve(&command.key, param, self.session.values());
        Some((command, spec))
    }

    pub(in crate::console) fn drain_fetches(&mut self) {
        while let Some(msg) = self.fetch.try_recv() {
            self.apply_fetch(msg);
        }
    }

    fn apply_fetch(&mut self, msg: FetchMsg) {
        match msg {
            FetchMsg::Status(Ok(status)) => {
                if status.has_access {
                    self.gate = Gate::Granted(status);
                    self.catalog_pending = true;
                    self.fetch.commands(self.client.clone());
                } else {
                    self.gate = Gate::Denied(format!(
                        "no operator access on channel {}",
                        self.client.channel()
                    ));
                }
            }
            // Fail-closed: a failed status check is a denial.
            FetchMsg::Status(Err(msg)) => {
                self.gate = Gate::Denied(msg);
            }
            FetchMsg::Commands(result) => {
                self.catalog_pending = false;
                match result {
                    Ok(commands) => {
                        self.catalog = Catalog::new(commands, self.operator_level());
                        self.catalog_error = None;
                    }
                    // Catalog stays empty; the console shows zero commands
                    // rather than crashing.
                    Err(msg) => {
                        self.catalog = Catalog::default();
                        self.catalog_error = Some(msg);
                    }
                }
                self.cursor = 0;
            }
            FetchMsg::Collection { key, req, result } => {
                self.cache.complete(&key, req, result);
            }
            FetchMsg::Executed(result) => {
                let succeeded = result.is_ok();
                self.session.execute_finished(result);
                if succeeded {
                    self.focus = Focus::Commands;
                    self.param_cursor = 0;
                    self.editing = None;
                    self.picker = None;
                    self.roster_refresh_at = Some(Instant::now() + ROSTER_REFRESH_DELAY);
                }
            }
            FetchMsg::Channels(result) => {
                if let Some(wizard) = self.wizard.as_mut() {
                    wizard.set_channels(result);
                }
            }
            FetchMsg::Characters { channel, result } => {
                if let Some(wizard) = self.wizard.as_mut() {
                    wizard.set_characters(&channel, result);
                }
            }
            FetchMsg::Deleted(result) => {
                if let Some(wizard) = self.wizard.as_mut() {
                    if wizard.deletion_finished(result) {
                        self.wizard_reset_at = Some(Instant::now() + WIZARD_RESET_DELAY);
                    }
                }
            }
        }
    }

    /// The granted tier, used to gate catalog visibility. A granted status
    /// without a level falls back to the lowest tier.
    fn operator_level(&self) -> AccessLevel {
        match &self.gate {
            Gate::Granted(status) => status.level.unwrap_or(AccessLevel::Moderator),
            _ => AccessLevel::Moderator,
        }
    }

    pub(in crate::console) fn tick_timers(&mut self) {
        if self.roster_refresh_at.is_some_and(|at| at <= Instant::now()) {
            self.roster_refresh_at = None;
            self.cache.evict(&CollectionKey::Players);
            self.ensure_collection(CollectionKey::Players);
        }
        if self.wizard_reset_at.is_some_and(|at| at <= Instant::now()) {
            self.wizard_reset_at = None;
            if let Some(wizard) = self.wizard.as_mut() {
                wizard.reset_after_success();
                self.fetch.channels(self.client.clone());
            }
        }
    }

    /// Cache-or-fetch: starts a fetch only when the cache has no slot for the
    /// key, so a collection already loading or loaded is never re-triggered.
    pub(in crate::console) fn ensure_collection(&mut self, key: CollectionKey) {
        if let Some(req) = self.cache.begin(key.clone()) {
            self.fetch.collection(self.client.clone(), key, req);
        }
    }

    /// Kick off fetches for every collection the selected command's inputs
    /// currently resolve to. All parameter inputs are shown at once, so this
    /// runs after selection and after every value change.
    pub(in crate::console) fn sync_param_fetches(&mut self) {
        let keys: Vec<CollectionKey> = match self.selected_command() {
            Some(command) => command
                .params
                .iter()
                .filter_map(|param| {
                    resolver::resolve(&command.key, param, self.session.values()).collection()
                })
                .collect(),
            None => return,
        };
        for key in keys {
            self.ensure_collection(key);
        }
    }

    pub(in crate::console) fn select_command_under_cursor(&mut self) {
        let Some(key) = self.visible().get(self.cursor).map(|cmd| cmd.key.clone()) else {
            return;
        };
        if self.session.busy() {
            return;
        }
        self.session.select(&key);
        self.focus = Focus::Params;
        self.param_cursor = 0;
        self.editing = None;
        self.sync_param_fetches();
    }

    /// Write one parameter value. A `playerId` transition (including to or
    /// from empty) invalidates every player-scoped cache entry and drops the
    /// values that were picked against the old player's collections.
    pub(in crate::console) fn set_param_value(
        &mut self,
        name: &str,
        value: String,
        label: Option<String>,
    ) {
        let player_changed = self.session.set_value(name, value, label);
        if player_changed {
            self.cache.invalidate_player_scoped();
            let dependent: Vec<String> = match self.selected_command() {
                Some(command) => command
                    .params
                    .iter()
                    .filter(|param| {
                        resolver::resolve(&command.key, param, self.session.values())
                            .player_dependent()
                    })
                    .map(|param| param.name.clone())
                    .collect(),
                None => Vec::new(),
            };
            let names: Vec<&str> = dependent.iter().map(String::as_str).collect();
            self.session.clear_player_dependent(&names);
            // Previews need the player's stat snapshot.
            if let Some(id) = self.session.player_id() {
                self.ensure_collection(CollectionKey::Stats(id.to_string()));
            }
        }
        self.sync_param_fetches();
    }

    pub(in crate::console) fn open_picker_at_cursor(&mut self) {
        let Some((_, spec)) = self.param_spec(self.param_cursor) else {
            return;
        };
        let Some(key) = spec.collection() else {
            return;
        };
        let param = match self.selected_command().and_then(|c| c.params.get(self.param_cursor)) {
            Some(p) => p.name.clone(),
            None => return,
        };
        self.ensure_collection(key.clone());
        self.picker = Some(Picker::new(&param, key));
    }

    pub(in crate::console) fn apply_pick(&mut self, value: String, label: String) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        self.set_param_value(&picker.param, value, Some(label));
    }

    /// Cycle a select param to its next declared option.
    pub(in crate::console) fn cycle_select_option(&mut self) {
        let Some((command, InputSpec::Select { options })) = self.param_spec(self.param_cursor)
        else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let name = match command.params.get(self.param_cursor) {
            Some(p) => p.name.clone(),
            None => return,
        };
        let next = match self.session.value(&name) {
            Some(current) => {
                let ix = options.iter().position(|o| o == current);
                match ix {
                    Some(ix) if ix + 1 < options.len() => options[ix + 1].clone(),
                    _ => options[0].clone(),
                }
            }
            None => options[0].clone(),
        };
        self.set_param_value(&name, next, None);
    }

    /// Execution is strictly serialized: the busy guard refuses a second
    /// submit while one is pending.
    pub(in crate::console) fn start_execute(&mut self) {
        let (key, params, missing) = {
            let Some(command) = self.selected_command() else {
                return;
            };
            let missing = self.session.missing_required(command);
            let missing = if missing.is_empty() {
                None
            } else {
                Some(format!("missing required: {}", missing.join(", ")))
            };
            (
                command.key.clone(),
                crate::session::typed_params(command, self.session.values()),
                missing,
            )
        };
        if let Some(msg) = missing {
            self.session.set_outcome(Outcome::Failure(msg));
            return;
        }
        if !self.session.execute_started() {
            return;
        }
        self.fetch.execute(self.client.clone(), key, params);
    }

    pub(in crate::console) fn open_wizard(&mut self) {
        if self.wizard.is_some() {
            return;
        }
        self.wizard = Some(super::DeleteWizard::new());
        self.fetch.channels(self.client.clone());
    }

    pub(in crate::console) fn wizard_choose_channel(&mut self) {
        let Some(channel) = self.wizard.as_mut().and_then(|w| w.choose_channel()) else {
            return;
        };
        self.fetch.characters(self.client.clone(), channel);
    }

    pub(in crate::console) fn wizard_confirm_delete(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        let Some((channel, player_id, name)) = wizard.delete_request() else {
            return;
        };
        wizard.deletion_started();
        self.fetch.delete(self.client.clone(), channel, player_id, name);
    }

    /// Manual refresh: retry failed loads and refetch the roster. The
    /// command catalog itself is immutable for the session.
    pub(in crate::console) fn refresh(&mut self) {
        let mut keys = vec![CollectionKey::Players];
        if let Some(id) = self.session.player_id() {
            keys.push(CollectionKey::Stats(id.to_string()));
        }
        if let Some(command) = self.selected_command() {
            keys.extend(command.params.iter().filter_map(|param| {
                resolver::resolve(&command.key, param, self.session.values()).collection()
            }));
        }
        for key in &keys {
            self.cache.clear_failed(key);
        }
        self.cache.evict(&CollectionKey::Players);
        for key in keys {
            self.ensure_collection(key);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/actions_tests.rs"]
mod tests;
