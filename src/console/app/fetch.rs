//! Background fetch pool. Every network call runs on its own thread and
//! reports back over an mpsc channel the event loop drains each tick; the UI
//! never blocks on the wire. There is no cancellation — staleness is handled
//! at the receiving end (cache request ids, wizard channel guard).

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::cache::{Collection, CollectionKey};
use crate::model::{ChannelInfo, CharacterInfo, Command, OperatorStatus};
use crate::remote::RemoteClient;

pub(in crate::console) enum FetchMsg {
    Status(Result<OperatorStatus, String>),
    Commands(Result<Vec<Command>, String>),
    Collection {
        key: CollectionKey,
        req: u64,
        result: Result<Collection, String>,
    },
    Executed(Result<String, String>),
    Channels(Result<Vec<ChannelInfo>, String>),
    Characters {
        channel: String,
        result: Result<Vec<CharacterInfo>, String>,
    },
    Deleted(Result<String, String>),
}

pub(in crate::console) struct FetchPool {
    tx: Sender<FetchMsg>,
    rx: Receiver<FetchMsg>,
}

fn err_string(err: anyhow::Error) -> String {
    format!("{:#}", err)
}

impl FetchPool {
    pub(in crate::console) fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub(in crate::console) fn try_recv(&self) -> Option<FetchMsg> {
        self.rx.try_recv().ok()
    }

    fn spawn(&self, job: impl FnOnce() -> FetchMsg + Send + 'static) {
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            // A send failure means the console is gone; nothing to do.
            let _ = tx.send(job());
        });
    }

    pub(in crate::console) fn status(&self, client: Arc<RemoteClient>) {
        self.spawn(move || FetchMsg::Status(client.operator_status().map_err(err_string)));
    }

    pub(in crate::console) fn commands(&self, client: Arc<RemoteClient>) {
        self.spawn(move || FetchMsg::Commands(client.commands().map_err(err_string)));
    }

    pub(in crate::console) fn collection(
        &self,
        client: Arc<RemoteClient>,
        key: CollectionKey,
        req: u64,
    ) {
        self.spawn(move || {
            let result = fetch_collection(&client, &key);
            FetchMsg::Collection { key, req, result }
        });
    }

    pub(in crate::console) fn execute(
        &self,
        client: Arc<RemoteClient>,
        command: String,
        params: serde_json::Map<String, serde_json::Value>,
    ) {
        self.spawn(move || FetchMsg::Executed(client.execute(&command, params).map_err(err_string)));
    }

    pub(in crate::console) fn channels(&self, client: Arc<RemoteClient>) {
        self.spawn(move || FetchMsg::Channels(client.channels().map_err(err_string)));
    }

    pub(in crate::console) fn characters(&self, client: Arc<RemoteClient>, channel: String) {
        self.spawn(move || {
            let result = client.channel_characters(&channel).map_err(err_string);
            FetchMsg::Characters { channel, result }
        });
    }

    pub(in crate::console) fn delete(
        &self,
        client: Arc<RemoteClient>,
        channel: String,
        player_id: String,
        character_name: String,
    ) {
        self.spawn(move || {
            FetchMsg::Deleted(
                client
                    .delete_character(&channel, &player_id, &character_name)
                    .map_err(err_string),
            )
        });
    }
}

fn fetch_collection(client: &RemoteClient, key: &CollectionKey) -> Result<Collection, String> {
    let out = match key {
        CollectionKey::Items => client.items().map(Collection::Items),
        CollectionKey::Players => client.players().map(Collection::Players),
        CollectionKey::Achievements => client.achievements().map(Collection::Achievements),
        CollectionKey::Locations => client.locations().map(Collection::Locations),
        CollectionKey::Encounters => client.encounters().map(Collection::Encounters),
        CollectionKey::Inventory(id) => client
            .player_inventory(id)
            .map(|resp| Collection::Inventory(resp.inventory)),
        CollectionKey::Quests(id) => client
            .player_quests(id)
            .map(|resp| Collection::Quests(resp.quests)),
        CollectionKey::Stats(id) => client.player_stats(id).map(Collection::Stats),
    };
    out.map_err(err_string)
}
