//! Per-workspace realtime socket connections.
//!
//! The `SocketRegistry` hands out one `WorkspaceSocket` per workspace slug.
//! A handle is a cheap clone of the outbound message queue; the transport
//! task (browser only) drains that queue into a `gloo-net` WebSocket and
//! forwards inbound events to the caller.
//!
//! ARCHITECTURE
//! ============
//! The shell keeps its handle in a `SocketSlot`. Retargeting the slot to a
//! new workspace releases the old handle before acquiring the new one, and
//! clearing the slot on unmount releases it exactly once.
//!
//! TRADE-OFFS
//! ==========
//! Every handle carries a generation number. Releasing closes the queue, so
//! a presence announce that races a teardown fails with
//! `SocketError::Closed` instead of landing on the next connection. The
//! registry only removes an entry whose generation matches, so a stale
//! release never tears down a newer connection for the same workspace.
//!
//! The outbound queue is unbounded, so messages pile up while the transport
//! backs off. Each (re)connect first flushes that backlog with only the
//! newest message per event name.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use futures::{FutureExt, StreamExt};
use serde::Serialize;

use super::types::{Channel, LoginPayload, SocketEvent, User};

/// Socket event name for the presence announce.
pub const LOGIN_EVENT: &str = "login";

/// Socket event name carrying the ids of online members.
pub const ONLINE_LIST_EVENT: &str = "onlineList";

/// Failure to emit on a socket handle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SocketError {
    /// The handle was released; its queue no longer accepts messages.
    #[error("socket for workspace `{0}` is closed")]
    Closed(String),
    /// The payload could not be serialized.
    #[error("failed to encode socket event: {0}")]
    Encode(String),
}

/// Handle to the realtime connection of one workspace.
#[derive(Clone, Debug)]
pub struct WorkspaceSocket {
    workspace: String,
    generation: u64,
    tx: UnboundedSender<String>,
}

impl PartialEq for WorkspaceSocket {
    fn eq(&self, other: &Self) -> bool {
        self.workspace == other.workspace && self.generation == other.generation
    }
}

impl WorkspaceSocket {
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the handle still accepts messages.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Queue an event for delivery.
    ///
    /// # Errors
    ///
    /// Returns `SocketError::Closed` after the handle was released.
    pub fn emit<T: Serialize>(&self, event: &str, data: &T) -> Result<(), SocketError> {
        let text = encode_event(event, data)?;
        self.tx
            .unbounded_send(text)
            .map_err(|_| SocketError::Closed(self.workspace.clone()))
    }

    fn close(&self) {
        self.tx.close_channel();
    }
}

/// Serialize an event into the wire envelope `{ "event", "data" }`.
///
/// # Errors
///
/// Returns `SocketError::Encode` if `data` cannot be serialized.
pub fn encode_event<T: Serialize>(event: &str, data: &T) -> Result<String, SocketError> {
    let data = serde_json::to_value(data).map_err(|e| SocketError::Encode(e.to_string()))?;
    let envelope = SocketEvent {
        event: event.to_owned(),
        data,
    };
    serde_json::to_string(&envelope).map_err(|e| SocketError::Encode(e.to_string()))
}

/// Parse an inbound text message. Non-envelope text is ignored.
pub fn decode_event(text: &str) -> Option<SocketEvent> {
    serde_json::from_str(text).ok()
}

/// Online member ids from an `onlineList` event.
pub fn parse_online_list(event: &SocketEvent) -> Option<Vec<i64>> {
    if event.event != ONLINE_LIST_EVENT {
        return None;
    }
    serde_json::from_value(event.data.clone()).ok()
}

/// Presence payload once both the user and the channel list are loaded.
pub fn presence_payload(user: Option<&User>, channels: Option<&[Channel]>) -> Option<LoginPayload> {
    let user = user?;
    let channels = channels?;
    Some(LoginPayload {
        id: user.id,
        channels: channels.iter().map(|c| c.id).collect(),
    })
}

/// Messages queued on `outbound` that are ready right now, oldest first.
pub fn take_backlog(outbound: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut backlog = Vec::new();
    while let Some(Some(text)) = outbound.next().now_or_never() {
        backlog.push(text);
    }
    backlog
}

/// Keep only the newest message of each event name, ordered by when those
/// newest messages were queued. Text that is not an envelope is kept.
pub fn coalesce_backlog(backlog: Vec<String>) -> Vec<String> {
    let names: Vec<Option<String>> = backlog.iter().map(|text| decode_event(text).map(|e| e.event)).collect();
    backlog
        .into_iter()
        .enumerate()
        .filter(|(i, _)| match &names[*i] {
            Some(name) => !names[i + 1..].iter().any(|later| later.as_ref() == Some(name)),
            None => true,
        })
        .map(|(_, text)| text)
        .collect()
}

/// Result of acquiring a socket.
#[derive(Debug)]
pub struct Acquired {
    pub socket: WorkspaceSocket,
    /// Outbound queue for a newly created connection. `None` when an
    /// existing connection was reused and its transport is already running.
    pub outbound: Option<UnboundedReceiver<String>>,
}

/// Workspace-keyed table of live connections.
#[derive(Debug, Default)]
pub struct SocketRegistry {
    sockets: HashMap<String, WorkspaceSocket>,
    next_generation: u64,
}

impl SocketRegistry {
    /// Return the live socket for `workspace`, creating one if needed.
    pub fn acquire(&mut self, workspace: &str) -> Acquired {
        if let Some(existing) = self.sockets.get(workspace).filter(|s| s.is_open()) {
            return Acquired {
                socket: existing.clone(),
                outbound: None,
            };
        }
        self.next_generation += 1;
        let (tx, rx) = unbounded();
        let socket = WorkspaceSocket {
            workspace: workspace.to_owned(),
            generation: self.next_generation,
            tx,
        };
        self.sockets.insert(workspace.to_owned(), socket.clone());
        Acquired {
            socket,
            outbound: Some(rx),
        }
    }

    /// Close and forget `socket`. Returns `false` for an already released or
    /// superseded handle.
    pub fn release(&mut self, socket: &WorkspaceSocket) -> bool {
        let current = self
            .sockets
            .get(socket.workspace())
            .is_some_and(|s| s.generation == socket.generation);
        if !current {
            return false;
        }
        if let Some(removed) = self.sockets.remove(socket.workspace()) {
            removed.close();
        }
        true
    }

    pub fn is_connected(&self, workspace: &str) -> bool {
        self.sockets.contains_key(workspace)
    }

    pub fn len(&self) -> usize {
        self.sockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty()
    }
}

/// What a `SocketSlot::retarget` call did.
#[derive(Debug, Default)]
pub struct Retarget {
    /// The handle that was released, if the workspace changed.
    pub released: Option<WorkspaceSocket>,
    /// The newly acquired handle, if the workspace changed to `Some`.
    pub acquired: Option<Acquired>,
}

/// The shell's current socket, shared with its cleanup hook.
#[derive(Clone, Debug, Default)]
pub struct SocketSlot(Arc<Mutex<Option<WorkspaceSocket>>>);

impl SocketSlot {
    pub fn current(&self) -> Option<WorkspaceSocket> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Point the slot at `workspace`: release the old handle first, then
    /// acquire the new one. Same workspace is a no-op.
    pub fn retarget(&self, registry: &mut SocketRegistry, workspace: Option<&str>) -> Retarget {
        let mut current = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().map(WorkspaceSocket::workspace) == workspace {
            return Retarget::default();
        }
        let released = current.take().filter(|old| registry.release(old));
        let acquired = workspace.map(|ws| registry.acquire(ws));
        *current = acquired.as_ref().map(|a| a.socket.clone());
        Retarget { released, acquired }
    }

    /// Release the held handle, if any.
    pub fn clear(&self, registry: &mut SocketRegistry) -> Option<WorkspaceSocket> {
        self.retarget(registry, None).released
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static REGISTRY: std::cell::RefCell<SocketRegistry> = std::cell::RefCell::new(SocketRegistry::default());
}

/// Run `f` against the browser-wide socket registry.
#[cfg(feature = "hydrate")]
pub fn with_registry<R>(f: impl FnOnce(&mut SocketRegistry) -> R) -> R {
    REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}

/// Retarget `slot` in the browser registry and start a transport for any
/// newly created connection. Returns the handle the slot now holds.
#[cfg(feature = "hydrate")]
pub fn retarget_slot(
    slot: &SocketSlot,
    workspace: Option<&str>,
    on_event: leptos::prelude::Callback<SocketEvent>,
) -> Option<WorkspaceSocket> {
    let retarget = with_registry(|registry| slot.retarget(registry, workspace));
    if let Some(old) = retarget.released.as_ref() {
        leptos::logging::log!("released socket for {}", old.workspace());
    }
    if let Some(Acquired {
        socket,
        outbound: Some(outbound),
    }) = retarget.acquired
    {
        let url = crate::config::config().socket_url(socket.workspace());
        spawn_transport(url, socket, outbound, on_event);
    }
    slot.current()
}

/// Pump one connection: reconnect with exponential backoff until the handle
/// is released.
#[cfg(feature = "hydrate")]
fn spawn_transport(
    url: String,
    socket: WorkspaceSocket,
    outbound: UnboundedReceiver<String>,
    on_event: leptos::prelude::Callback<SocketEvent>,
) {
    leptos::task::spawn_local(async move {
        let mut outbound = outbound;
        let mut backoff_ms: u32 = 1000;
        let max_backoff_ms: u32 = 10_000;

        while socket.is_open() {
            match connect_and_run(&url, &mut outbound, on_event).await {
                Ok(()) => leptos::logging::log!("socket {url} disconnected"),
                Err(e) => leptos::logging::warn!("socket {url} error: {e}"),
            }
            if !socket.is_open() {
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
            backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
        }
        leptos::logging::log!("socket {url} closed");
    });
}

#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    outbound: &mut UnboundedReceiver<String>,
    on_event: leptos::prelude::Callback<SocketEvent>,
) -> Result<(), String> {
    use futures::SinkExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Callable;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Anything queued while disconnected collapses to the latest of each
    // event, so a reconnect does not replay stale announces.
    for text in coalesce_backlog(take_backlog(outbound)) {
        ws_write.send(Message::Text(text)).await.map_err(|e| e.to_string())?;
    }

    let send_task = async {
        while let Some(text) = outbound.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Some(event) = decode_event(&text) {
                        on_event.run(event);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    Ok(())
}
