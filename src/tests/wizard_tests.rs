    use super::*;

    fn channels(names: &[&str]) -> Vec<ChannelInfo> {
        names
            .iter()
            .map(|n| ChannelInfo {
                name: n.to_string(),
                character_count: 1,
            })
            .collect()
    }

    fn characters(names: &[&str]) -> Vec<CharacterInfo> {
        names
            .iter()
            .map(|n| CharacterInfo {
                id: format!("id-{n}"),
                name: n.to_string(),
                level: 4,
            })
            .collect()
    }

    fn at_confirm() -> DeleteWizard {
        let mut wizard = DeleteWizard::new();
        wizard.set_channels(Ok(channels(&["alpha", "beta"])));
        let channel = wizard.choose_channel().expect("advance to characters");
        wizard.set_characters(&channel, Ok(characters(&["Hero"])));
        wizard.choose_character();
        assert_eq!(wizard.step, WizardStep::Confirm);
        wizard
    }

    #[test]
    fn forward_path_reaches_confirm_with_the_selection() {
        let wizard = at_confirm();
        let (channel, player_id, name) = wizard.delete_request().expect("ready");
        assert_eq!(channel, "alpha");
        assert_eq!(player_id, "id-Hero");
        assert_eq!(name, "Hero");
    }

    #[test]
    fn choose_channel_only_works_on_its_own_step() {
        let mut wizard = at_confirm();
        assert!(wizard.choose_channel().is_none());
    }

    #[test]
    fn back_from_confirm_keeps_the_character_list() {
        let mut wizard = at_confirm();
        assert!(wizard.back());
        assert_eq!(wizard.step, WizardStep::SelectCharacter);
        assert!(wizard.character.is_none());
        assert!(wizard.characters.is_some());
        assert_eq!(wizard.channel.as_deref(), Some("alpha"));
    }

    #[test]
    fn back_from_character_select_drops_the_list() {
        let mut wizard = at_confirm();
        wizard.back();
        assert!(wizard.back());
        assert_eq!(wizard.step, WizardStep::SelectChannel);
        assert!(wizard.characters.is_none());
        assert!(wizard.channel.is_none());
    }

    #[test]
    fn back_on_the_first_step_means_close() {
        let mut wizard = DeleteWizard::new();
        assert!(!wizard.back());
    }

    #[test]
    fn stale_character_lists_are_ignored() {
        let mut wizard = DeleteWizard::new();
        wizard.set_channels(Ok(channels(&["alpha", "beta"])));
        wizard.choose_channel().expect("advance");

        wizard.set_characters("beta", Ok(characters(&["Wrong"])));
        assert!(wizard.characters.is_none());

        wizard.set_characters("alpha", Ok(characters(&["Right"])));
        assert_eq!(wizard.characters.as_ref().map(|c| c.len()), Some(1));
    }

    #[test]
    fn delete_request_is_gated_to_an_idle_confirm_step() {
        let mut wizard = DeleteWizard::new();
        assert!(wizard.delete_request().is_none());

        let mut wizard = at_confirm();
        wizard.deletion_started();
        assert!(wizard.delete_request().is_none());
    }

    #[test]
    fn failed_deletion_surfaces_the_error_and_stays_put() {
        let mut wizard = at_confirm();
        wizard.deletion_started();
        assert!(!wizard.deletion_finished(Err("server says no".to_string())));
        assert_eq!(wizard.step, WizardStep::Confirm);
        assert_eq!(wizard.error.as_deref(), Some("server says no"));
        assert!(wizard.delete_request().is_some());
    }

    #[test]
    fn successful_deletion_shows_the_notice_and_blocks_resubmits() {
        let mut wizard = at_confirm();
        wizard.deletion_started();
        assert!(wizard.deletion_finished(Ok("deleted Hero".to_string())));
        assert_eq!(wizard.notice.as_deref(), Some("deleted Hero"));
        assert!(wizard.delete_request().is_none());
    }

    #[test]
    fn reset_after_success_returns_to_the_first_step() {
        let mut wizard = at_confirm();
        wizard.deletion_started();
        wizard.deletion_finished(Ok("deleted Hero".to_string()));
        wizard.reset_after_success();
        assert_eq!(wizard.step, WizardStep::SelectChannel);
        assert!(wizard.channels.is_none());
        assert!(wizard.notice.is_none());
    }

    #[test]
    fn failed_channel_loads_surface_inline() {
        let mut wizard = DeleteWizard::new();
        wizard.set_channels(Err("timeout".to_string()));
        assert_eq!(wizard.channels.as_ref().map(|c| c.len()), Some(0));
        assert_eq!(wizard.error.as_deref(), Some("timeout"));
        assert!(wizard.choose_channel().is_none());
    }
