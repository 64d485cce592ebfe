//! Channel and character endpoints used by the deletion flow.

use super::*;
use crate::model::{ChannelInfo, CharacterInfo};

impl RemoteClient {
    pub fn channels(&self) -> Result<Vec<ChannelInfo>> {
        let resp: ChannelsResponse = with_retries("list channels", || {
            let resp = self
                .client
                .get(self.url("/api/operator/channels"))
                .header(reqwest::header::AUTHORIZATION, self.auth())
                .send()
                .context("channels request")?;
            self.ensure_ok(resp, "list channels")?
                .json()
                .context("parse channels")
        })?;
        Ok(resp.channels)
    }

    pub fn channel_characters(&self, channel: &str) -> Result<Vec<CharacterInfo>> {
        let resp: CharactersResponse = with_retries("list channel characters", || {
            let resp = self
                .client
                .get(self.url("/api/operator/channel-characters"))
                .query(&[("channel", channel)])
                .header(reqwest::header::AUTHORIZATION, self.auth())
                .send()
                .context("channel characters request")?;
            self.ensure_ok(resp, "list channel characters")?
                .json()
                .context("parse channel characters")
        })?;
        Ok(resp.characters)
    }

    /// Irreversible. The wizard is the only caller and gates this behind its
    /// confirm step; no retries.
    pub fn delete_character(
        &self,
        channel: &str,
        player_id: &str,
        character_name: &str,
    ) -> Result<String> {
        let resp = self
            .client
            .delete(self.url("/api/operator/delete-character"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&DeleteCharacterRequest {
                channel: channel.to_string(),
                player_id: player_id.to_string(),
                character_name: character_name.to_string(),
            })
            .send()
            .context("delete character request")?;
        let out: ExecuteResponse = self
            .ensure_ok(resp, "delete character")?
            .json()
            .context("parse delete character response")?;
        Ok(out.message)
    }
}
