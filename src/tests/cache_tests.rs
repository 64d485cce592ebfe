    use super::*;
    use crate::model::{PlayerStats, PlayerSummary};

    fn players(names: &[&str]) -> Collection {
        Collection::Players(
            names
                .iter()
                .map(|n| PlayerSummary {
                    id: format!("id-{n}"),
                    name: n.to_string(),
                    level: 1,
                })
                .collect(),
        )
    }

    fn stats(gold: i64) -> Collection {
        Collection::Stats(PlayerStats {
            gold,
            level: 1,
            xp: 0,
            location: String::new(),
        })
    }

    #[test]
    fn begin_suppresses_duplicate_fetches() {
        let mut cache = ReferenceCache::default();
        assert!(cache.begin(CollectionKey::Players).is_some());
        assert!(cache.begin(CollectionKey::Players).is_none());
        assert!(cache.is_loading(&CollectionKey::Players));
    }

    #[test]
    fn completion_fills_the_slot() {
        let mut cache = ReferenceCache::default();
        let req = cache.begin(CollectionKey::Players).expect("slot free");
        cache.complete(&CollectionKey::Players, req, Ok(players(&["ada"])));
        let loaded = cache.players().expect("loaded");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "ada");
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut cache = ReferenceCache::default();
        let old_req = cache.begin(CollectionKey::Players).expect("slot free");
        cache.evict(&CollectionKey::Players);
        let new_req = cache.begin(CollectionKey::Players).expect("slot free again");
        assert_ne!(old_req, new_req);

        cache.complete(&CollectionKey::Players, old_req, Ok(players(&["stale"])));
        assert!(cache.is_loading(&CollectionKey::Players));

        cache.complete(&CollectionKey::Players, new_req, Ok(players(&["fresh"])));
        assert_eq!(cache.players().expect("loaded")[0].name, "fresh");
    }

    #[test]
    fn completion_for_an_evicted_slot_is_dropped() {
        let mut cache = ReferenceCache::default();
        let req = cache.begin(CollectionKey::Players).expect("slot free");
        cache.evict(&CollectionKey::Players);
        cache.complete(&CollectionKey::Players, req, Ok(players(&["ghost"])));
        assert!(cache.slot(&CollectionKey::Players).is_none());
    }

    #[test]
    fn failures_are_recorded_and_retryable() {
        let mut cache = ReferenceCache::default();
        let req = cache.begin(CollectionKey::Items).expect("slot free");
        cache.complete(&CollectionKey::Items, req, Err("boom".to_string()));
        assert_eq!(cache.failure(&CollectionKey::Items), Some("boom"));
        assert!(cache.begin(CollectionKey::Items).is_none());

        cache.clear_failed(&CollectionKey::Items);
        assert!(cache.begin(CollectionKey::Items).is_some());
    }

    #[test]
    fn clear_failed_leaves_loaded_slots_alone() {
        let mut cache = ReferenceCache::default();
        let req = cache.begin(CollectionKey::Players).expect("slot free");
        cache.complete(&CollectionKey::Players, req, Ok(players(&["ada"])));
        cache.clear_failed(&CollectionKey::Players);
        assert!(cache.players().is_some());
    }

    #[test]
    fn player_scoped_invalidation_keeps_global_collections() {
        let mut cache = ReferenceCache::default();
        let req = cache.begin(CollectionKey::Players).expect("slot free");
        cache.complete(&CollectionKey::Players, req, Ok(players(&["ada"])));
        let req = cache
            .begin(CollectionKey::Stats("p1".to_string()))
            .expect("slot free");
        cache.complete(&CollectionKey::Stats("p1".to_string()), req, Ok(stats(10)));

        cache.invalidate_player_scoped();

        assert!(cache.players().is_some());
        assert!(cache.stats("p1").is_none());
    }

    #[test]
    fn no_cross_player_leakage_after_invalidation() {
        let mut cache = ReferenceCache::default();
        let key = CollectionKey::Stats("p1".to_string());
        let req = cache.begin(key.clone()).expect("slot free");
        cache.complete(&key, req, Ok(stats(999)));

        cache.invalidate_player_scoped();
        let key2 = CollectionKey::Stats("p2".to_string());
        let req2 = cache.begin(key2.clone()).expect("slot free");
        cache.complete(&key2, req2, Ok(stats(5)));

        assert!(cache.stats("p1").is_none());
        assert_eq!(cache.stats("p2").expect("loaded").gold, 5);
    }

    #[test]
    fn in_flight_scoped_fetches_die_with_invalidation() {
        let mut cache = ReferenceCache::default();
        let key = CollectionKey::Inventory("p1".to_string());
        let req = cache.begin(key.clone()).expect("slot free");

        cache.invalidate_player_scoped();
        cache.complete(&key, req, Ok(Collection::Inventory(Vec::new())));

        assert!(cache.slot(&key).is_none());
    }
