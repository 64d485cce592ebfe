    use super::*;
    use crate::model::{OperatorStatus, RemoteConfig};

    fn test_app() -> App {
        let client = RemoteClient::new(RemoteConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            token: String::new(),
            channel: "test".to_string(),
        })
        .expect("build client");
        App::new(client)
    }

    fn granted(level: AccessLevel) -> Gate {
        Gate::Granted(OperatorStatus {
            has_access: true,
            level: Some(level),
            username: "op".to_string(),
            role: String::new(),
        })
    }

    fn cmd(key: &str, level: AccessLevel) -> Command {
        Command {
            key: key.to_string(),
            name: key.to_string(),
            description: String::new(),
            level,
            dangerous: false,
            params: Vec::new(),
        }
    }

    #[test]
    fn command_payloads_are_gated_by_the_operators_tier() {
        let mut app = test_app();
        app.gate = granted(AccessLevel::Streamer);

        app.apply_fetch(FetchMsg::Commands(Ok(vec![
            cmd("giveGold", AccessLevel::Moderator),
            cmd("spawnEncounter", AccessLevel::Streamer),
            cmd("reloadGameData", AccessLevel::Creator),
        ])));

        let keys: Vec<&str> = app
            .visible()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["giveGold", "spawnEncounter"]);
    }

    #[test]
    fn a_granted_status_without_a_level_gates_to_the_lowest_tier() {
        let mut app = test_app();
        app.gate = Gate::Granted(OperatorStatus {
            has_access: true,
            level: None,
            username: "op".to_string(),
            role: String::new(),
        });

        app.apply_fetch(FetchMsg::Commands(Ok(vec![
            cmd("giveGold", AccessLevel::Moderator),
            cmd("reloadGameData", AccessLevel::Creator),
        ])));

        let keys: Vec<&str> = app
            .visible()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["giveGold"]);
    }

    #[test]
    fn refresh_retries_the_bound_players_failed_stats() {
        let mut app = test_app();
        app.session.select("giveGold");
        app.session.set_value("playerId", "p1".to_string(), None);

        let key = CollectionKey::Stats("p1".to_string());
        let req = app.cache.begin(key.clone()).expect("slot free");
        app.cache.complete(&key, req, Err("boom".to_string()));

        app.refresh();

        assert!(app.cache.is_loading(&key));
    }

    #[test]
    fn refresh_leaves_a_loaded_stats_slot_alone() {
        let mut app = test_app();
        app.session.select("giveGold");
        app.session.set_value("playerId", "p1".to_string(), None);

        let key = CollectionKey::Stats("p1".to_string());
        let req = app.cache.begin(key.clone()).expect("slot free");
        app.cache.complete(
            &key,
            req,
            Ok(crate::cache::Collection::Stats(crate::model::PlayerStats {
                gold: 10,
                level: 1,
                xp: 0,
                location: String::new(),
            })),
        );

        app.refresh();

        assert!(app.cache.stats("p1").is_some());
    }
