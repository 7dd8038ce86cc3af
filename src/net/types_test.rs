use super::*;

// =============================================================
// Outbound wire shape
// =============================================================

#[test]
fn outbound_message_serializes_camel_case() {
    let msg = OutboundMessage {
        message: "hello".to_owned(),
        id: "m-1".to_owned(),
        sender: "user".to_owned(),
        is_user: true,
        session_id: "abc123".to_owned(),
    };
    let json = serde_json::to_value(&msg).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "message": "hello",
            "id": "m-1",
            "sender": "user",
            "isUser": true,
            "sessionId": "abc123"
        })
    );
}

#[test]
fn customer_and_agent_constructors_set_role_fields() {
    let c = OutboundMessage::customer("hi", "s-1");
    assert_eq!(c.sender, "user");
    assert!(c.is_user);
    assert_eq!(c.session_id, "s-1");

    let a = OutboundMessage::agent("hello", "s-1");
    assert_eq!(a.sender, "admin");
    assert!(!a.is_user);
}

#[test]
fn locally_minted_ids_are_distinct() {
    let a = OutboundMessage::customer("x", "s-1");
    let b = OutboundMessage::customer("x", "s-1");
    assert_ne!(a.id, b.id);
}

#[test]
fn optimistic_echo_carries_the_outbound_id() {
    let out = OutboundMessage::customer("hi", "s-1");
    let echo = out.to_chat_message();
    assert_eq!(echo.id, out.id);
    assert_eq!(echo.text, "hi");
    assert_eq!(echo.author, crate::state::chat::Author::Customer);
}

#[test]
fn start_chat_request_uses_chat_user_key() {
    let req = StartChatRequest { chat_user: "Ada".to_owned() };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json, serde_json::json!({"chatUser": "Ada"}));
}

#[test]
fn start_chat_response_reads_session_id_key() {
    let resp: StartChatResponse =
        serde_json::from_value(serde_json::json!({"sessionId": "abc123"})).expect("deserialize");
    assert_eq!(resp.session_id, "abc123");
}

// =============================================================
// Inbound payload validation
// =============================================================

#[test]
fn parse_inbound_accepts_message_field() {
    let msg = parse_inbound_message(&serde_json::json!({
        "id": "m-1",
        "message": "hi",
        "isUser": true
    }))
    .expect("valid payload");

    assert_eq!(msg.id, "m-1");
    assert_eq!(msg.text, "hi");
    assert_eq!(msg.author, crate::state::chat::Author::Customer);
}

#[test]
fn parse_inbound_falls_back_to_text_field() {
    let msg = parse_inbound_message(&serde_json::json!({
        "id": "m-2",
        "text": "hello"
    }))
    .expect("valid payload");

    assert_eq!(msg.text, "hello");
}

#[test]
fn parse_inbound_defaults_missing_role_to_agent() {
    let msg = parse_inbound_message(&serde_json::json!({
        "id": "m-3",
        "message": "from the desk"
    }))
    .expect("valid payload");

    assert_eq!(msg.author, crate::state::chat::Author::Agent);
}

#[test]
fn parse_inbound_rejects_missing_id() {
    let err = parse_inbound_message(&serde_json::json!({"message": "hi"})).unwrap_err();
    assert!(matches!(err, ChatError::MalformedPayload("id")));
}

#[test]
fn parse_inbound_rejects_missing_text() {
    let err = parse_inbound_message(&serde_json::json!({"id": "m-4"})).unwrap_err();
    assert!(matches!(err, ChatError::MalformedPayload("message")));
}

// =============================================================
// History response parsing
// =============================================================

#[test]
fn parse_history_keeps_server_order_and_drops_malformed_entries() {
    let body = serde_json::json!({
        "messages": [
            {"id": "1", "message": "first", "isUser": true},
            {"message": "no id"},
            {"id": "2", "message": "second", "isUser": false}
        ]
    });
    let msgs = parse_history(&body);

    let ids: Vec<&str> = msgs.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn parse_history_without_messages_key_is_empty() {
    assert!(parse_history(&serde_json::json!({})).is_empty());
}
