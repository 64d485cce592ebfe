//! Character deletion wizard: a strictly linear three-step flow kept apart
//! from the general command path so the single most destructive operation
//! carries extra friction. Only the confirm step can fire the delete.

use crate::model::{ChannelInfo, CharacterInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum WizardStep {
    SelectChannel,
    SelectCharacter,
    Confirm,
}

#[derive(Debug)]
pub(super) struct DeleteWizard {
    pub(super) step: WizardStep,
    pub(super) channels: Option<Vec<ChannelInfo>>,
    pub(super) channel_ix: usize,
    pub(super) channel: Option<String>,
    pub(super) characters: Option<Vec<CharacterInfo>>,
    pub(super) character_ix: usize,
    pub(super) character: Option<CharacterInfo>,
    pub(super) busy: bool,
    /// Success message shown on Confirm until the auto-reset fires.
    pub(super) notice: Option<String>,
    /// Step-local error; shown inline, never advances the step.
    pub(super) error: Option<String>,
}

impl DeleteWizard {
    pub(super) fn new() -> Self {
        Self {
            step: WizardStep::SelectChannel,
            channels: None,
            channel_ix: 0,
            channel: None,
            characters: None,
            character_ix: 0,
            character: None,
            busy: false,
            notice: None,
            error: None,
        }
    }

    pub(super) fn set_channels(&mut self, result: Result<Vec<ChannelInfo>, String>) {
        match result {
            Ok(channels) => {
                self.channel_ix = self.channel_ix.min(channels.len().saturating_sub(1));
                self.channels = Some(channels);
            }
            Err(msg) => {
                self.channels = Some(Vec::new());
                self.error = Some(msg);
            }
        }
    }

    /// Advance SelectChannel -> SelectCharacter. Returns the channel whose
    /// character list the caller must fetch.
    pub(super) fn choose_channel(&mut self) -> Option<String> {
        if self.step != WizardStep::SelectChannel || self.busy {
            return None;
        }
        let channel = self.channels.as_ref()?.get(self.channel_ix)?.name.clone();
        self.channel = Some(channel.clone());
        self.characters = None;
        self.character_ix = 0;
        self.error = None;
        self.step = WizardStep::SelectCharacter;
        Some(channel)
    }

    /// Character list arrived. Applied only while we are still waiting on the
    /// same channel; a response for a channel we have since left is stale and
    /// ignored.
    pub(super) fn set_characters(
        &mut self,
        channel: &str,
        result: Result<Vec<CharacterInfo>, String>,
    ) {
        if self.step != WizardStep::SelectCharacter || self.channel.as_deref() != Some(channel) {
            return;
        }
        match result {
            Ok(characters) => {
                self.character_ix = 0;
                self.characters = Some(characters);
            }
            Err(msg) => {
                self.characters = Some(Vec::new());
                self.error = Some(msg);
            }
        }
    }

    /// Advance SelectCharacter -> Confirm.
    pub(super) fn choose_character(&mut self) {
        if self.step != WizardStep::SelectCharacter || self.busy {
            return;
        }
        let Some(character) = self
            .characters
            .as_ref()
            .and_then(|list| list.get(self.character_ix))
        else {
            return;
        };
        self.character = Some(character.clone());
        self.error = None;
        self.step = WizardStep::Confirm;
    }

    /// Backward navigation discards downstream selections: leaving Confirm
    /// clears the chosen character (the loaded list survives for the same
    /// channel); leaving SelectCharacter clears both the character and the
    /// list. Returns false on the first step, where back means "close".
    pub(super) fn back(&mut self) -> bool {
        if self.busy {
            return true;
        }
        self.error = None;
        match self.step {
            WizardStep::Confirm => {
                self.character = None;
                self.step = WizardStep::SelectCharacter;
                true
            }
            WizardStep::SelectCharacter => {
                self.character = None;
                self.characters = None;
                self.character_ix = 0;
                self.channel = None;
                self.step = WizardStep::SelectChannel;
                true
            }
            WizardStep::SelectChannel => false,
        }
    }

    /// The delete request, available only from Confirm and only while idle.
    pub(super) fn delete_request(&self) -> Option<(String, String, String)> {
        if self.step != WizardStep::Confirm || self.busy || self.notice.is_some() {
            return None;
        }
        let channel = self.channel.clone()?;
        let character = self.character.as_ref()?;
        Some((channel, character.id.clone(), character.name.clone()))
    }

    pub(super) fn deletion_started(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Returns true on success; the caller schedules the auto-reset and the
    /// channel-list refresh (a channel's character count just changed).
    pub(super) fn deletion_finished(&mut self, result: Result<String, String>) -> bool {
        self.busy = false;
        match result {
            Ok(message) => {
                self.notice = Some(message);
                true
            }
            Err(msg) => {
                self.error = Some(msg);
                false
            }
        }
    }

    /// Auto-reset after a successful deletion: back to SelectChannel with a
    /// fresh channel list pending.
    pub(super) fn reset_after_success(&mut self) {
        *self = DeleteWizard::new();
    }

    pub(super) fn move_up(&mut self) {
        match self.step {
            WizardStep::SelectChannel => self.channel_ix = self.channel_ix.saturating_sub(1),
            WizardStep::SelectCharacter => self.character_ix = self.character_ix.saturating_sub(1),
            WizardStep::Confirm => {}
        }
    }

    pub(super) fn move_down(&mut self) {
        match self.step {
            WizardStep::SelectChannel => {
                let max = self
                    .channels
                    .as_ref()
                    .map(|c| c.len().saturating_sub(1))
                    .unwrap_or(0);
                self.channel_ix = (self.channel_ix + 1).min(max);
            }
            WizardStep::SelectCharacter => {
                let max = self
                    .characters
                    .as_ref()
                    .map(|c| c.len().saturating_sub(1))
                    .unwrap_or(0);
                self.character_ix = (self.character_ix + 1).min(max);
            }
            WizardStep::Confirm => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/wizard_tests.rs"]
mod tests;
