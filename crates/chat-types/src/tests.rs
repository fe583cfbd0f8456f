#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::session::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello");
        assert!(!msg.is_pending());
    }

    #[test]
    fn test_message_greeting_is_bot() {
        let msg = Message::greeting();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, GREETING);
    }

    #[test]
    fn test_message_pending() {
        assert!(Message::pending().is_pending());
        assert!(!Message::fallback().is_pending());
        // A user literally typing the sentinel is not a placeholder
        assert!(!Message::user(PENDING_SENTINEL).is_pending());
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);

        let msg: Message = serde_json::from_str(r#"{"sender":"bot","text":"yo"}"#).unwrap();
        assert_eq!(msg, Message::bot("yo"));
    }

    #[test]
    fn test_sender_rejects_unknown() {
        let result = serde_json::from_str::<Sender>(r#""system""#);
        assert!(result.is_err());
    }

    // ─── SessionCollection Tests ─────────────────────────────

    #[test]
    fn test_seeded_collection() {
        let c = SessionCollection::seeded();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(DEFAULT_SESSION), Some(&vec![Message::greeting()]));
        assert_eq!(c.first_name(), Some(DEFAULT_SESSION));
    }

    #[test]
    fn test_collection_insert_keeps_position() {
        let mut c = SessionCollection::new();
        c.insert("a", vec![]);
        c.insert("b", vec![]);
        c.insert("a", vec![Message::user("x")]);

        let names: Vec<&str> = c.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(c.get("a").unwrap().len(), 1);
    }

    #[test]
    fn test_collection_remove() {
        let mut c = SessionCollection::seeded();
        c.insert("work", vec![Message::greeting()]);
        assert!(c.remove(DEFAULT_SESSION).is_some());
        assert!(c.remove(DEFAULT_SESSION).is_none());
        assert_eq!(c.first_name(), Some("work"));
    }

    #[test]
    fn test_collection_serializes_as_object() {
        let c = SessionCollection::seeded();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"default":[{"sender":"bot","text":"Hello! How can I help you today?"}]}"#
        );
    }

    #[test]
    fn test_collection_deserialize_preserves_order() {
        let json = r#"{"zeta":[],"alpha":[{"sender":"user","text":"hi"}],"mid":[]}"#;
        let c: SessionCollection = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = c.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(c.get("alpha").unwrap()[0], Message::user("hi"));
    }

    #[test]
    fn test_collection_roundtrip_deep_equal() {
        let mut c = SessionCollection::seeded();
        c.insert(
            "work",
            vec![Message::greeting(), Message::user("hi"), Message::bot("hello!")],
        );
        c.insert("empty", vec![]);

        let json = serde_json::to_vec(&c).unwrap();
        let back: SessionCollection = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_collection_rejects_non_object() {
        assert!(serde_json::from_str::<SessionCollection>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<SessionCollection>(r#"{"a":"nope"}"#).is_err());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::ReplyReconciled {
            session: "work".to_string(),
            success: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ReplyReconciled"));
        let back: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.reply_endpoint, "http://127.0.0.1:8000/chat");
        assert_eq!(config.sessions_key, "chatSessions");
        assert_eq!(config.theme_key, "bgTheme");
        assert!(config.request_timeout_ms > 0);
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config: ChatConfig =
            serde_json::from_str(r#"{"reply_endpoint":"http://example.test/chat"}"#).unwrap();
        assert_eq!(config.reply_endpoint, "http://example.test/chat");
        assert_eq!(config.sessions_key, "chatSessions");
    }

    #[test]
    fn test_theme_labels_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_label(theme.label()), Some(*theme));
            let json = serde_json::to_string(theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.label()));
        }
        assert_eq!(Theme::from_label("Neon"), None);
        assert_eq!(Theme::default(), Theme::PurplePink);
    }

    #[test]
    fn test_config_validate() {
        assert!(ChatConfig::default().validate().is_ok());

        let blank = ChatConfig {
            reply_endpoint: "   ".to_string(),
            ..ChatConfig::default()
        };
        assert!(matches!(blank.validate(), Err(ChatError::Config(_))));

        let no_timeout = ChatConfig {
            request_timeout_ms: 0,
            ..ChatConfig::default()
        };
        assert!(matches!(no_timeout.validate(), Err(ChatError::Config(_))));

        let same_keys = ChatConfig {
            theme_key: "chatSessions".to_string(),
            ..ChatConfig::default()
        };
        assert!(matches!(same_keys.validate(), Err(ChatError::Config(_))));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let e = ChatError::Timeout(5000);
        assert_eq!(e.to_string(), "Reply timed out after 5000ms");

        let e = ChatError::Reply("HTTP 500".to_string());
        assert_eq!(e.to_string(), "Reply service error: HTTP 500");
    }

    #[test]
    fn test_error_from_serde() {
        let err = serde_json::from_str::<Message>("not json").unwrap_err();
        let e: ChatError = err.into();
        assert!(matches!(e, ChatError::Serialization(_)));
    }
}
