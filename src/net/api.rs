//! REST API helpers for communicating with the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide the feedback:
//! the shell redirects on a failed user fetch, toasts on logout failure, and
//! only logs a failed workspace creation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Channel, CreateChannelRequest, CreateWorkspaceRequest, InviteRequest, Member, PostChatRequest, User,
};

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The session is missing or expired.
    #[error("not logged in")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("request failed: {status}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP status with its response body.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            _ => Self::Rejected { status, message },
        }
    }

    /// Text suitable for a toast: the server's message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Decode the `GET /api/users` body. The backend answers `false` when no
/// session exists, which is treated the same as a 401.
#[cfg(any(test, feature = "hydrate"))]
fn decode_current_user(value: serde_json::Value) -> Result<User, ApiError> {
    if matches!(value, serde_json::Value::Bool(false) | serde_json::Value::Null) {
        return Err(ApiError::Unauthorized);
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Route names are user-chosen; encode them as single path segments.
#[cfg(any(test, feature = "hydrate"))]
fn encode(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}

#[cfg(any(test, feature = "hydrate"))]
fn channels_endpoint(workspace: &str) -> String {
    format!("/api/workspaces/{}/channels", encode(workspace))
}

#[cfg(any(test, feature = "hydrate"))]
fn members_endpoint(workspace: &str) -> String {
    format!("/api/workspaces/{}/members", encode(workspace))
}

#[cfg(any(test, feature = "hydrate"))]
fn channel_members_endpoint(workspace: &str, channel: &str) -> String {
    format!("/api/workspaces/{}/channels/{}/members", encode(workspace), encode(channel))
}

#[cfg(any(test, feature = "hydrate"))]
fn channel_chats_endpoint(workspace: &str, channel: &str) -> String {
    format!("/api/workspaces/{}/channels/{}/chats", encode(workspace), encode(channel))
}

#[cfg(any(test, feature = "hydrate"))]
fn dm_chats_endpoint(workspace: &str, member_id: i64) -> String {
    format!("/api/workspaces/{}/dms/{member_id}/chats", encode(workspace))
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, message))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = crate::config::config().api_url(path);
    let resp = check(gloo_net::http::Request::get(&url).send().await?).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = crate::config::config().api_url(path);
    let request = gloo_net::http::Request::post(&url).json(body)?;
    check(request.send().await?).await?;
    Ok(())
}

/// Fetch the authenticated user from `GET /api/users`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when there is no session.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value: serde_json::Value = get_json("/api/users").await?;
        decode_current_user(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the channel list of a workspace.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_channels(workspace: &str) -> Result<Vec<Channel>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&channels_endpoint(workspace)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workspace;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the member list of a workspace.
///
/// # Errors
///
/// Returns an error if the request fails or the body is malformed.
pub async fn fetch_members(workspace: &str) -> Result<Vec<Member>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&members_endpoint(workspace)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = workspace;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the session via `POST /api/users/logout`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::config().api_url("/api/users/logout");
        check(gloo_net::http::Request::post(&url).send().await?).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a workspace via `POST /api/workspaces`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn create_workspace(request: &CreateWorkspaceRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/workspaces", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create a channel in a workspace.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn create_channel(workspace: &str, request: &CreateChannelRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&channels_endpoint(workspace), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace, request);
        Err(ApiError::Unavailable)
    }
}

/// Invite a user to a workspace by email.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn invite_to_workspace(workspace: &str, request: &InviteRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&members_endpoint(workspace), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace, request);
        Err(ApiError::Unavailable)
    }
}

/// Invite a workspace member to a channel by email.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn invite_to_channel(workspace: &str, channel: &str, request: &InviteRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&channel_members_endpoint(workspace, channel), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace, channel, request);
        Err(ApiError::Unavailable)
    }
}

/// Post a message to a channel.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn post_channel_chat(workspace: &str, channel: &str, request: &PostChatRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&channel_chats_endpoint(workspace, channel), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace, channel, request);
        Err(ApiError::Unavailable)
    }
}

/// Post a direct message to a workspace member.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn post_dm_chat(workspace: &str, member_id: i64, request: &PostChatRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&dm_chats_endpoint(workspace, member_id), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workspace, member_id, request);
        Err(ApiError::Unavailable)
    }
}
