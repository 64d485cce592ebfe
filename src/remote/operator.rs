//! Access gate, command catalog, and execution endpoints.

use super::*;
use crate::model::{Command, OperatorStatus};

impl RemoteClient {
    /// Resolve the operator's tier for the configured channel. Any transport
    /// or decode failure is the caller's cue to fail closed.
    pub fn operator_status(&self) -> Result<OperatorStatus> {
        let resp = self
            .client
            .get(self.url("/api/operator/status"))
            .query(&[("channel", self.channel())])
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("operator status request")?;
        let status: OperatorStatus = self
            .ensure_ok(resp, "operator status")?
            .json()
            .context("parse operator status")?;
        Ok(status)
    }

    /// Fetch the permission-filtered command set. The wire shape is a map
    /// keyed by command key; flatten it with the key injected and a stable
    /// display order (tier, then name).
    pub fn commands(&self) -> Result<Vec<Command>> {
        let resp: CommandsResponse = with_retries("load commands", || {
            let resp = self
                .client
                .get(self.url("/api/operator/commands"))
                .query(&[("channel", self.channel())])
                .header(reqwest::header::AUTHORIZATION, self.auth())
                .send()
                .context("commands request")?;
            self.ensure_ok(resp, "load commands")?
                .json()
                .context("parse commands")
        })?;

        let mut commands: Vec<Command> = resp
            .commands
            .into_iter()
            .map(|(key, mut cmd)| {
                cmd.key = key;
                cmd
            })
            .collect();
        commands.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
        Ok(commands)
    }

    /// Submit an assembled command. No retries: execution is not idempotent.
    pub fn execute(
        &self,
        command: &str,
        params: serde_json::Map<String, serde_json::Value>,
    ) -> Result<String> {
        let resp = self
            .client
            .post(self.url("/api/operator/execute"))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .json(&ExecuteRequest {
                channel: self.channel().to_string(),
                command: command.to_string(),
                params,
            })
            .send()
            .context("execute request")?;
        let out: ExecuteResponse = self
            .ensure_ok(resp, "execute command")?
            .json()
            .context("parse execute response")?;
        Ok(out.message)
    }
}
