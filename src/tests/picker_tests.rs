    use super::*;

    fn item(name: &str, rarity: &str, slot: &str) -> ItemDef {
        ItemDef {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            rarity: rarity.to_string(),
            slot: slot.to_string(),
            description: String::new(),
        }
    }

    fn catalog() -> Vec<ItemDef> {
        vec![
            item("Iron Sword", "common", "weapon"),
            item("Flame Sword", "epic", "weapon"),
            item("Epic Helm", "epic", "armor"),
            item("Swordfish Charm", "rare", "trinket"),
        ]
    }

    #[test]
    fn item_filters_are_and_combined() {
        let rows = item_rows(&catalog(), "sword", Some("epic"), None);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Flame Sword"]);
    }

    #[test]
    fn slot_filter_narrows_further() {
        let rows = item_rows(&catalog(), "", Some("epic"), Some("armor"));
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Epic Helm"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(item_rows(&catalog(), "", None, None).len(), 4);
    }

    #[test]
    fn player_search_matches_name_or_id_case_insensitively() {
        let players = vec![
            PlayerSummary {
                id: "abc-123".to_string(),
                name: "Moonblade".to_string(),
                level: 9,
            },
            PlayerSummary {
                id: "xyz-777".to_string(),
                name: "Sunspear".to_string(),
                level: 3,
            },
        ];
        let by_name = player_rows(&players, "MOON");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].value, "abc-123");

        let by_id = player_rows(&players, "xyz");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].label, "Sunspear");
    }

    #[test]
    fn achievement_search_spans_the_description() {
        let achievements = vec![AchievementDef {
            id: "a1".to_string(),
            name: "Collector".to_string(),
            description: "Own fifty mythic items".to_string(),
        }];
        assert_eq!(achievement_rows(&achievements, "mythic").len(), 1);
        assert_eq!(achievement_rows(&achievements, "dragon").len(), 0);
    }

    #[test]
    fn locations_sort_by_biome_then_name() {
        let locations = vec![
            LocationDef {
                id: "l1".to_string(),
                name: "Zephyr Peak".to_string(),
                biome: "alpine".to_string(),
            },
            LocationDef {
                id: "l2".to_string(),
                name: "Ashen Flats".to_string(),
                biome: "volcanic".to_string(),
            },
            LocationDef {
                id: "l3".to_string(),
                name: "Crag Hollow".to_string(),
                biome: "alpine".to_string(),
            },
        ];
        let rows = location_rows(&locations, "");
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Crag Hollow", "Zephyr Peak", "Ashen Flats"]);
    }

    #[test]
    fn location_query_matches_the_biome_too() {
        let locations = vec![LocationDef {
            id: "l2".to_string(),
            name: "Ashen Flats".to_string(),
            biome: "volcanic".to_string(),
        }];
        assert_eq!(location_rows(&locations, "volc").len(), 1);
    }

    #[test]
    fn cycling_filters_wraps_back_to_unfiltered() {
        let mut picker = Picker::new("itemId", CollectionKey::Items);
        assert!(picker.rarity_filter().is_none());
        for _ in 0..RARITIES.len() {
            picker.cycle_rarity();
            assert!(picker.rarity_filter().is_some());
        }
        picker.cycle_rarity();
        assert!(picker.rarity_filter().is_none());
    }

    #[test]
    fn cycling_a_filter_resets_the_selection() {
        let mut picker = Picker::new("itemId", CollectionKey::Items);
        picker.selected = 3;
        picker.cycle_slot();
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn stats_collections_have_no_rows() {
        let picker = Picker::new("playerId", CollectionKey::Players);
        let rows = picker.rows(&Collection::Stats(crate::model::PlayerStats {
            gold: 0,
            level: 1,
            xp: 0,
            location: String::new(),
        }));
        assert!(rows.is_empty());
    }
