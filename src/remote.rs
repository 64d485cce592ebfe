use anyhow::{Context, Result};

use crate::model::RemoteConfig;

mod http_client;
use self::http_client::with_retries;

mod characters;
mod operator;
mod reference;
mod types;
pub use self::types::*;

/// Blocking HTTP client for the operator API. One instance per console run;
/// cheap to share behind an `Arc` for background fetches.
pub struct RemoteClient {
    remote: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("opcon")
            .build()
            .context("build reqwest client")?;
        Ok(Self { remote, client })
    }

    pub fn channel(&self) -> &str {
        &self.remote.channel
    }
}
