#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::theme::*;
    use chat_types::config::{ChatConfig, Theme};
    use chat_types::ChatError;
    use chat_types::event::ChatEvent;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::default();
        assert!(state.awaiting.is_empty());
        assert_eq!(state.status_text, "Ready");
        assert!(!state.show_new_session);
        assert!(state.new_session_name.is_empty());
        assert!(state.open_menu.is_none());
        assert!(!state.show_settings);
        assert_eq!(state.theme, Theme::PurplePink);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_new_with_theme() {
        let state = UiState::new(Theme::Sunset);
        assert_eq!(state.theme, Theme::Sunset);
    }

    #[test]
    fn test_ui_state_send_started_marks_busy() {
        let mut state = UiState::default();
        state.process_events(vec![ChatEvent::SendStarted {
            session: "default".to_string(),
        }]);
        assert!(state.is_busy());
        assert!(state.awaiting.contains("default"));
        assert!(state.status_text.contains("default"));
    }

    #[test]
    fn test_ui_state_reply_reconciled_clears_busy() {
        let mut state = UiState::default();
        state.process_events(vec![
            ChatEvent::SendStarted { session: "default".to_string() },
            ChatEvent::ReplyReconciled { session: "default".to_string(), success: true },
        ]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_failed_reply_reports_session() {
        let mut state = UiState::default();
        state.process_events(vec![
            ChatEvent::SendStarted { session: "work".to_string() },
            ChatEvent::ReplyReconciled { session: "work".to_string(), success: false },
        ]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Reply failed in 'work'");
    }

    #[test]
    fn test_ui_state_two_sessions_awaiting() {
        let mut state = UiState::default();
        state.process_events(vec![
            ChatEvent::SendStarted { session: "a".to_string() },
            ChatEvent::SendStarted { session: "b".to_string() },
            ChatEvent::ReplyReconciled { session: "a".to_string(), success: true },
        ]);
        assert!(state.is_busy());
        assert!(!state.awaiting.contains("a"));
        assert!(state.awaiting.contains("b"));
    }

    #[test]
    fn test_ui_state_reply_discarded_clears_session() {
        let mut state = UiState::default();
        state.process_events(vec![
            ChatEvent::SendStarted { session: "x".to_string() },
            ChatEvent::ReplyDiscarded { session: "x".to_string() },
        ]);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_session_created_closes_prompt() {
        let mut state = UiState::default();
        state.show_new_session = true;
        state.new_session_name = "work".to_string();
        state.process_events(vec![ChatEvent::SessionCreated { name: "work".to_string() }]);
        assert!(!state.show_new_session);
        assert!(state.new_session_name.is_empty());
        assert_eq!(state.status_text, "Created 'work'");
    }

    #[test]
    fn test_ui_state_session_deleted_closes_its_menu() {
        let mut state = UiState::default();
        state.toggle_menu("work");
        state.process_events(vec![
            ChatEvent::SendStarted { session: "work".to_string() },
            ChatEvent::SessionDeleted { name: "work".to_string() },
        ]);
        assert!(state.open_menu.is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_session_deleted_keeps_other_menu() {
        let mut state = UiState::default();
        state.toggle_menu("home");
        state.process_events(vec![ChatEvent::SessionDeleted { name: "work".to_string() }]);
        assert_eq!(state.open_menu.as_deref(), Some("home"));
    }

    #[test]
    fn test_ui_state_switch_closes_menu() {
        let mut state = UiState::default();
        state.toggle_menu("home");
        state.process_events(vec![ChatEvent::SessionSwitched { name: "home".to_string() }]);
        assert!(state.open_menu.is_none());
    }

    #[test]
    fn test_ui_state_session_cleared_status() {
        let mut state = UiState::default();
        state.process_events(vec![ChatEvent::SessionCleared { name: "default".to_string() }]);
        assert_eq!(state.status_text, "Cleared 'default'");
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = UiState::default();
        state.toggle_menu("a");
        assert_eq!(state.open_menu.as_deref(), Some("a"));
        state.toggle_menu("b");
        assert_eq!(state.open_menu.as_deref(), Some("b"));
        state.toggle_menu("b");
        assert!(state.open_menu.is_none());
    }

    // ─── Settings editor ─────────────────────────────────────

    #[test]
    fn test_settings_edits_stay_in_draft_until_commit() {
        let mut editor = SettingsEditor::new(ChatConfig::default());
        editor.draft.reply_endpoint = "http://localhost:9000/chat".to_string();

        assert!(editor.is_dirty());
        assert_eq!(editor.applied().reply_endpoint, ChatConfig::default().reply_endpoint);

        let applied = editor.commit().unwrap().clone();
        assert_eq!(applied.reply_endpoint, "http://localhost:9000/chat");
        assert_eq!(*editor.applied(), applied);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_settings_reset_discards_edits() {
        let mut editor = SettingsEditor::new(ChatConfig::default());
        editor.draft.request_timeout_ms = 5_000;
        editor.reset();
        assert!(!editor.is_dirty());
        assert_eq!(editor.draft, ChatConfig::default());
    }

    #[test]
    fn test_settings_invalid_commit_keeps_running_config() {
        let mut editor = SettingsEditor::new(ChatConfig::default());
        editor.draft.reply_endpoint = String::new();

        assert!(matches!(editor.commit(), Err(ChatError::Config(_))));
        assert_eq!(*editor.applied(), ChatConfig::default());
        assert!(editor.is_dirty());
    }

    // ─── Typing indicator ────────────────────────────────────

    #[test]
    fn test_typing_dots_cycle() {
        assert_eq!(typing_dots(0.0), ".");
        assert_eq!(typing_dots(0.6), "..");
        assert_eq!(typing_dots(1.1), "...");
        assert_eq!(typing_dots(1.5), ".");
    }

    #[test]
    fn test_typing_dots_negative_time() {
        assert_eq!(typing_dots(-3.0), ".");
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_palettes_are_distinct() {
        let palettes: Vec<Palette> = Theme::all().iter().map(|t| palette(*t)).collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in palettes.iter().skip(i + 1) {
                assert_ne!(a.accent, b.accent);
                assert_ne!(a.backdrop, b.backdrop);
            }
        }
    }

    #[test]
    fn test_palette_bubbles_differ() {
        for t in Theme::all() {
            let p = palette(*t);
            assert_ne!(p.user_bubble, p.bot_bubble);
        }
    }
}
