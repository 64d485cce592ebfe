    use super::*;
    use crate::model::{ParamKind, ParamSpec};

    fn command(params: Vec<ParamSpec>) -> Command {
        Command {
            key: "giveGold".to_string(),
            name: "Give Gold".to_string(),
            description: String::new(),
            level: crate::model::AccessLevel::Moderator,
            dangerous: false,
            params,
        }
    }

    fn param(name: &str, kind: ParamKind, required: bool) -> ParamSpec {
        ParamSpec {
            name: name.to_string(),
            kind,
            required,
            options: Vec::new(),
            placeholder: None,
        }
    }

    #[test]
    fn selecting_a_command_starts_clean() {
        let mut session = Session::default();
        session.select("giveGold");
        session.set_value("amount", "50".to_string(), None);
        session.set_outcome(Outcome::Failure("nope".to_string()));

        session.select("removeGold");

        assert_eq!(session.selected(), Some("removeGold"));
        assert!(session.value("amount").is_none());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn reselecting_the_same_command_also_resets() {
        let mut session = Session::default();
        session.select("giveGold");
        session.set_value("amount", "50".to_string(), None);
        session.select("giveGold");
        assert!(session.value("amount").is_none());
    }

    #[test]
    fn player_transitions_are_detected() {
        let mut session = Session::default();
        session.select("giveGold");

        assert!(session.set_value("playerId", "p1".to_string(), None));
        assert!(!session.set_value("playerId", "p1".to_string(), None));
        assert!(session.set_value("playerId", "p2".to_string(), None));
        assert!(session.set_value("playerId", String::new(), None));
        assert!(session.player_id().is_none());
        assert!(session.set_value("playerId", "p1".to_string(), None));
    }

    #[test]
    fn non_player_params_never_report_a_transition() {
        let mut session = Session::default();
        session.select("giveGold");
        assert!(!session.set_value("amount", "50".to_string(), None));
    }

    #[test]
    fn empty_values_remove_the_entry_and_its_label() {
        let mut session = Session::default();
        session.select("giveItem");
        session.set_value("itemId", "sword-1".to_string(), Some("Iron Sword".to_string()));
        assert_eq!(session.label_for("itemId"), Some("Iron Sword"));

        session.set_value("itemId", String::new(), None);
        assert!(session.value("itemId").is_none());
        assert!(session.label_for("itemId").is_none());
    }

    #[test]
    fn clearing_player_dependent_params_drops_values_and_labels() {
        let mut session = Session::default();
        session.select("removeItem");
        session.set_value("playerId", "p1".to_string(), None);
        session.set_value("itemId", "potion".to_string(), Some("Potion".to_string()));

        session.clear_player_dependent(&["itemId"]);

        assert!(session.value("itemId").is_none());
        assert!(session.label_for("itemId").is_none());
        assert_eq!(session.player_id(), Some("p1"));
    }

    #[test]
    fn execution_is_serialized_by_the_busy_flag() {
        let mut session = Session::default();
        session.select("giveGold");
        assert!(session.execute_started());
        assert!(session.busy());
        assert!(!session.execute_started());
    }

    #[test]
    fn success_clears_the_form() {
        let mut session = Session::default();
        session.select("giveGold");
        session.set_value("amount", "50".to_string(), None);
        session.execute_started();

        session.execute_finished(Ok("done".to_string()));

        assert!(!session.busy());
        assert!(session.selected().is_none());
        assert!(session.value("amount").is_none());
        assert_eq!(session.outcome(), Some(&Outcome::Success("done".to_string())));
    }

    #[test]
    fn failure_preserves_the_form_for_retry() {
        let mut session = Session::default();
        session.select("giveGold");
        session.set_value("amount", "50".to_string(), None);
        session.execute_started();

        session.execute_finished(Err("insufficient tier".to_string()));

        assert!(!session.busy());
        assert_eq!(session.selected(), Some("giveGold"));
        assert_eq!(session.value("amount"), Some("50"));
        assert_eq!(
            session.outcome(),
            Some(&Outcome::Failure("insufficient tier".to_string()))
        );
    }

    #[test]
    fn missing_required_ignores_optional_params() {
        let cmd = command(vec![
            param("playerId", ParamKind::Text, true),
            param("amount", ParamKind::Number, true),
            param("note", ParamKind::Text, false),
        ]);
        let mut session = Session::default();
        session.select("giveGold");
        session.set_value("playerId", "p1".to_string(), None);

        assert_eq!(session.missing_required(&cmd), vec!["amount"]);
    }

    #[test]
    fn typed_params_coerce_numbers() {
        let cmd = command(vec![
            param("playerId", ParamKind::Text, true),
            param("amount", ParamKind::Number, true),
        ]);
        let mut values = BTreeMap::new();
        values.insert("playerId".to_string(), "p1".to_string());
        values.insert("amount".to_string(), "50".to_string());

        let out = typed_params(&cmd, &values);
        assert_eq!(out.get("playerId"), Some(&serde_json::Value::from("p1")));
        assert_eq!(out.get("amount"), Some(&serde_json::Value::from(50)));
    }

    #[test]
    fn unparseable_numbers_fall_back_to_the_raw_string() {
        let cmd = command(vec![param("amount", ParamKind::Number, true)]);
        let mut values = BTreeMap::new();
        values.insert("amount".to_string(), "lots".to_string());

        let out = typed_params(&cmd, &values);
        assert_eq!(out.get("amount"), Some(&serde_json::Value::from("lots")));
    }

    #[test]
    fn param_pairs_accept_declared_keys() {
        let cmd = command(vec![
            param("playerId", ParamKind::Text, true),
            param("amount", ParamKind::Number, true),
        ]);
        let values = parse_param_pairs(
            &cmd,
            &["playerId=p1".to_string(), "amount=50".to_string()],
        )
        .expect("parse pairs");
        assert_eq!(values.get("playerId").map(String::as_str), Some("p1"));
        assert_eq!(values.get("amount").map(String::as_str), Some("50"));
    }

    #[test]
    fn param_pairs_reject_unknown_keys() {
        let cmd = command(vec![param("amount", ParamKind::Number, true)]);
        let err = parse_param_pairs(&cmd, &["ammount=50".to_string()]).unwrap_err();
        assert!(
            err.to_string().contains("unknown parameter ammount"),
            "{}",
            err
        );
        assert!(err.to_string().contains("amount"), "{}", err);
    }

    #[test]
    fn param_pairs_reject_malformed_pairs() {
        let cmd = command(vec![param("amount", ParamKind::Number, true)]);
        let err = parse_param_pairs(&cmd, &["amount".to_string()]).unwrap_err();
        assert!(
            err.to_string().contains("expected key=value"),
            "{}",
            err
        );
    }

    #[test]
    fn typed_params_skip_unset_and_undeclared_entries() {
        let cmd = command(vec![
            param("playerId", ParamKind::Text, true),
            param("amount", ParamKind::Number, true),
        ]);
        let mut values = BTreeMap::new();
        values.insert("playerId".to_string(), "p1".to_string());
        values.insert("amount".to_string(), String::new());
        values.insert("rogue".to_string(), "x".to_string());

        let out = typed_params(&cmd, &values);
        assert_eq!(out.len(), 1);
        assert!(out.contains_key("playerId"));
    }
