use anyhow::Result;

mod app;
mod input;
mod picker;
mod view;
mod views;
mod wizard;

use crate::remote::RemoteClient;

/// Run the full-screen operator console against the given remote.
pub fn run(client: RemoteClient) -> Result<()> {
    app::run(client)
}
