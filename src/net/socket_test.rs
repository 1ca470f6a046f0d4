use super::*;
use crate::net::types::Workspace;
use futures::StreamExt;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: 5,
        nickname: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        workspaces: vec![Workspace {
            id: 1,
            name: "Acme".to_owned(),
            url: "acme".to_owned(),
        }],
    }
}

fn make_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: 10,
            name: "일반".to_owned(),
            private: false,
            workspace_id: Some(1),
        },
        Channel {
            id: 11,
            name: "random".to_owned(),
            private: false,
            workspace_id: Some(1),
        },
    ]
}

fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(Some(text)) = rx.try_next() {
        out.push(text);
    }
    out
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn encode_event_wraps_payload() {
    let text = encode_event(LOGIN_EVENT, &LoginPayload { id: 1, channels: vec![2] }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({ "event": "login", "data": { "id": 1, "channels": [2] } }));
}

#[test]
fn decode_event_ignores_non_envelope_text() {
    assert!(decode_event("hello").is_none());
    assert!(decode_event(r#"{"data":1}"#).is_none());
}

#[test]
fn parse_online_list_reads_ids() {
    let event = decode_event(r#"{"event":"onlineList","data":[1,3]}"#).unwrap();
    assert_eq!(parse_online_list(&event), Some(vec![1, 3]));
}

#[test]
fn parse_online_list_skips_other_events() {
    let event = decode_event(r#"{"event":"message","data":[1]}"#).unwrap();
    assert_eq!(parse_online_list(&event), None);
}

// =============================================================
// presence_payload
// =============================================================

#[test]
fn presence_payload_requires_user_and_channels() {
    let user = make_user();
    let channels = make_channels();
    assert_eq!(presence_payload(None, Some(channels.as_slice())), None);
    assert_eq!(presence_payload(Some(&user), None), None);
}

#[test]
fn presence_payload_lists_channel_ids() {
    let user = make_user();
    let channels = make_channels();
    assert_eq!(
        presence_payload(Some(&user), Some(channels.as_slice())),
        Some(LoginPayload { id: 5, channels: vec![10, 11] })
    );
}

#[test]
fn presence_payload_with_empty_channel_list_still_announces() {
    let user = make_user();
    assert_eq!(
        presence_payload(Some(&user), Some(&[][..])),
        Some(LoginPayload { id: 5, channels: vec![] })
    );
}

// =============================================================
// SocketRegistry
// =============================================================

#[test]
fn acquire_creates_one_connection_per_workspace() {
    let mut registry = SocketRegistry::default();
    let first = registry.acquire("acme");
    let second = registry.acquire("acme");
    assert!(first.outbound.is_some());
    assert!(second.outbound.is_none());
    assert_eq!(first.socket, second.socket);
    assert_eq!(registry.len(), 1);
}

#[test]
fn emit_queues_encoded_event() {
    let mut registry = SocketRegistry::default();
    let Acquired { socket, outbound } = registry.acquire("acme");
    let mut rx = outbound.unwrap();
    socket.emit(LOGIN_EVENT, &LoginPayload { id: 1, channels: vec![] }).unwrap();
    let sent = drain(&mut rx);
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("\"event\":\"login\""));
}

#[test]
fn release_closes_handle_and_rejects_later_emits() {
    let mut registry = SocketRegistry::default();
    let Acquired { socket, outbound } = registry.acquire("acme");
    let mut rx = outbound.unwrap();
    assert!(registry.release(&socket));
    assert!(!socket.is_open());
    assert!(registry.is_empty());
    assert_eq!(
        socket.emit(LOGIN_EVENT, &serde_json::json!({})),
        Err(SocketError::Closed("acme".to_owned()))
    );
    assert_eq!(futures::executor::block_on(rx.next()), None);
}

#[test]
fn release_is_exactly_once() {
    let mut registry = SocketRegistry::default();
    let socket = registry.acquire("acme").socket;
    assert!(registry.release(&socket));
    assert!(!registry.release(&socket));
}

#[test]
fn stale_release_keeps_newer_connection() {
    let mut registry = SocketRegistry::default();
    let Acquired {
        socket: old,
        outbound: _old_rx,
    } = registry.acquire("acme");
    assert!(registry.release(&old));
    let Acquired {
        socket: new,
        outbound: _new_rx,
    } = registry.acquire("acme");
    assert!(new.generation() > old.generation());
    assert!(!registry.release(&old));
    assert!(new.is_open());
    assert!(registry.is_connected("acme"));
}

// =============================================================
// SocketSlot
// =============================================================

#[test]
fn retarget_acquires_for_first_workspace() {
    let mut registry = SocketRegistry::default();
    let slot = SocketSlot::default();
    let result = slot.retarget(&mut registry, Some("acme"));
    assert!(result.released.is_none());
    assert_eq!(result.acquired.map(|a| a.socket.workspace().to_owned()), Some("acme".to_owned()));
    assert_eq!(slot.current().map(|s| s.workspace().to_owned()), Some("acme".to_owned()));
}

#[test]
fn retarget_same_workspace_is_noop() {
    let mut registry = SocketRegistry::default();
    let slot = SocketSlot::default();
    slot.retarget(&mut registry, Some("acme"));
    let result = slot.retarget(&mut registry, Some("acme"));
    assert!(result.released.is_none());
    assert!(result.acquired.is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn retarget_releases_old_before_acquiring_new() {
    let mut registry = SocketRegistry::default();
    let slot = SocketSlot::default();
    let old = slot.retarget(&mut registry, Some("acme")).acquired.unwrap().socket;
    let result = slot.retarget(&mut registry, Some("globex"));
    assert_eq!(result.released, Some(old.clone()));
    assert!(!old.is_open());
    assert!(!registry.is_connected("acme"));
    assert!(registry.is_connected("globex"));
}

#[test]
fn clear_releases_once_then_nothing() {
    let mut registry = SocketRegistry::default();
    let slot = SocketSlot::default();
    slot.retarget(&mut registry, Some("acme"));
    assert!(slot.clear(&mut registry).is_some());
    assert!(slot.clear(&mut registry).is_none());
    assert!(registry.is_empty());
    assert!(slot.current().is_none());
}

#[test]
fn announce_on_released_handle_fails_instead_of_leaking() {
    let mut registry = SocketRegistry::default();
    let slot = SocketSlot::default();
    let stale = slot.retarget(&mut registry, Some("acme")).acquired.unwrap().socket;
    let fresh = slot.retarget(&mut registry, Some("globex")).acquired.unwrap();
    let mut fresh_rx = fresh.outbound.unwrap();

    let payload = presence_payload(Some(&make_user()), Some(make_channels().as_slice())).unwrap();
    assert!(stale.emit(LOGIN_EVENT, &payload).is_err());
    assert!(drain(&mut fresh_rx).is_empty());
}

// =============================================================
// Backlog
// =============================================================

#[test]
fn take_backlog_drains_ready_messages_in_order() {
    let mut registry = SocketRegistry::default();
    let Acquired { socket, outbound } = registry.acquire("acme");
    let mut rx = outbound.unwrap();
    socket.emit(LOGIN_EVENT, &LoginPayload { id: 1, channels: vec![] }).unwrap();
    socket.emit("typing", &serde_json::json!({ "id": 1 })).unwrap();

    let backlog = take_backlog(&mut rx);
    assert_eq!(backlog.len(), 2);
    assert!(backlog[0].contains("\"login\""));
    assert!(backlog[1].contains("\"typing\""));
    assert!(take_backlog(&mut rx).is_empty());
    assert!(socket.is_open());
}

#[test]
fn repeated_announces_while_disconnected_collapse_to_latest() {
    let mut registry = SocketRegistry::default();
    let Acquired { socket, outbound } = registry.acquire("acme");
    let mut rx = outbound.unwrap();
    for id in 1..=3 {
        socket.emit(LOGIN_EVENT, &LoginPayload { id, channels: vec![10] }).unwrap();
    }

    let flushed = coalesce_backlog(take_backlog(&mut rx));
    assert_eq!(flushed.len(), 1);
    let event = decode_event(&flushed[0]).unwrap();
    assert_eq!(event.event, LOGIN_EVENT);
    assert_eq!(event.data["id"], 3);
}

#[test]
fn coalesce_keeps_latest_of_each_event_in_queue_order() {
    let login = |id: i64| encode_event(LOGIN_EVENT, &LoginPayload { id, channels: vec![] }).unwrap();
    let typing = encode_event("typing", &serde_json::json!({})).unwrap();
    let backlog = vec![login(1), typing.clone(), "not json".to_owned(), login(2)];

    assert_eq!(coalesce_backlog(backlog), vec![typing, "not json".to_owned(), login(2)]);
}
