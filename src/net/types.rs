//! Wire DTOs for the REST API and the realtime socket.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`Workspaces` on users, `private`
//! on channels) through serde renames so the rest of the client can use
//! plain Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user, including workspace memberships.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    #[serde(rename = "Workspaces", default)]
    pub workspaces: Vec<Workspace>,
}

/// A collaboration space the user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL slug used in routes and socket namespaces.
    pub url: String,
}

/// A channel inside the active workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(rename = "WorkspaceId", default)]
    pub workspace_id: Option<i64>,
}

/// A member of the active workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub nickname: String,
    pub email: String,
}

/// Body of `POST /api/workspaces`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub workspace: String,
    pub url: String,
}

/// Body of `POST /api/workspaces/{ws}/channels`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    pub name: String,
}

/// Body of the workspace/channel invite endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
}

/// Body of the channel/DM chat endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChatRequest {
    pub content: String,
}

/// Presence announce payload sent as the socket `login` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub id: i64,
    pub channels: Vec<i64>,
}

/// Envelope for every socket text message, in both directions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocketEvent {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
