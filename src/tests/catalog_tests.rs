    use super::*;
    use crate::model::AccessLevel;

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
    fn classify_covers_known_keys() {
        assert_eq!(classify("giveGold"), Category::Economy);
        assert_eq!(classify("removeItem"), Category::Economy);
        assert_eq!(classify("teleportPlayer"), Category::World);
        assert_eq!(classify("resetDungeon"), Category::World);
        assert_eq!(classify("broadcastMessage"), Category::System);
        assert_eq!(classify("revivePlayer"), Category::Player);
    }

    #[test]
    fn unknown_keys_land_in_player() {
        assert_eq!(classify("someFutureCommand"), Category::Player);
        assert_eq!(classify(""), Category::Player);
    }

    #[test]
    fn economy_filter_keeps_only_economy_commands() {
        let commands = vec![
            cmd("giveGold", AccessLevel::Moderator),
            cmd("teleportPlayer", AccessLevel::Streamer),
            cmd("giveItem", AccessLevel::Streamer),
        ];
        let visible = filter_by_category(&commands, CategoryFilter::Only(Category::Economy));
        let keys: Vec<&str> = visible.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["giveGold", "giveItem"]);
    }

    #[test]
    fn all_filter_is_identity() {
        let commands = vec![
            cmd("giveGold", AccessLevel::Moderator),
            cmd("broadcastMessage", AccessLevel::Creator),
        ];
        let visible = filter_by_category(&commands, CategoryFilter::All);
        assert_eq!(visible.len(), commands.len());
    }

    #[test]
    fn grouping_omits_empty_tiers() {
        let commands = vec![
            cmd("giveGold", AccessLevel::Moderator),
            cmd("reloadGameData", AccessLevel::Creator),
        ];
        let refs: Vec<&Command> = commands.iter().collect();
        let grouped = group_by_level(&refs);
        let tiers: Vec<AccessLevel> = grouped.iter().map(|(level, _)| *level).collect();
        assert_eq!(tiers, vec![AccessLevel::Moderator, AccessLevel::Creator]);
    }

    #[test]
    fn grouping_preserves_order_within_a_tier() {
        let commands = vec![
            cmd("healPlayer", AccessLevel::Moderator),
            cmd("giveGold", AccessLevel::Moderator),
        ];
        let refs: Vec<&Command> = commands.iter().collect();
        let grouped = group_by_level(&refs);
        let keys: Vec<&str> = grouped[0].1.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["healPlayer", "giveGold"]);
    }

    #[test]
    fn streamers_never_see_creator_commands_from_a_raw_payload() {
        let catalog = Catalog::new(
            vec![
                cmd("giveGold", AccessLevel::Moderator),
                cmd("reloadGameData", AccessLevel::Creator),
            ],
            AccessLevel::Streamer,
        );
        let keys: Vec<&str> = catalog
            .visible(CategoryFilter::All)
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["giveGold"]);
        assert!(catalog.get("reloadGameData").is_none());
    }

    #[test]
    fn creators_see_every_tier() {
        let catalog = Catalog::new(
            vec![
                cmd("giveGold", AccessLevel::Moderator),
                cmd("spawnEncounter", AccessLevel::Streamer),
                cmd("reloadGameData", AccessLevel::Creator),
            ],
            AccessLevel::Creator,
        );
        assert_eq!(catalog.commands().len(), 3);
    }

    #[test]
    fn category_filter_cycles_back_to_all() {
        let mut filter = CategoryFilter::All;
        for _ in 0..=Category::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
    }
