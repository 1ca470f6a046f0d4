use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_reads_capitalized_workspaces_field() {
    let value = serde_json::json!({
        "id": 1,
        "nickname": "alice",
        "email": "alice@example.com",
        "Workspaces": [{ "id": 7, "name": "Acme", "url": "acme" }]
    });
    let user: User = serde_json::from_value(value).unwrap();
    assert_eq!(user.workspaces.len(), 1);
    assert_eq!(user.workspaces[0].url, "acme");
}

#[test]
fn user_without_workspaces_defaults_to_empty() {
    let value = serde_json::json!({ "id": 1, "nickname": "alice", "email": "a@b.c" });
    let user: User = serde_json::from_value(value).unwrap();
    assert!(user.workspaces.is_empty());
}

// =============================================================
// Channel
// =============================================================

#[test]
fn channel_tolerates_missing_optional_fields() {
    let value = serde_json::json!({ "id": 3, "name": "일반" });
    let channel: Channel = serde_json::from_value(value).unwrap();
    assert_eq!(channel.name, "일반");
    assert!(!channel.private);
    assert_eq!(channel.workspace_id, None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn create_workspace_request_has_exactly_two_fields() {
    let body = CreateWorkspaceRequest {
        workspace: "Acme".to_owned(),
        url: "acme".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "workspace": "Acme", "url": "acme" })
    );
}

#[test]
fn login_payload_serializes_id_and_channel_ids() {
    let payload = LoginPayload { id: 5, channels: vec![1, 2] };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "id": 5, "channels": [1, 2] })
    );
}

// =============================================================
// SocketEvent
// =============================================================

#[test]
fn socket_event_data_defaults_to_null() {
    let event: SocketEvent = serde_json::from_str(r#"{"event":"hello"}"#).unwrap();
    assert_eq!(event.event, "hello");
    assert!(event.data.is_null());
}
