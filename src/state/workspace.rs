//! Route-scoped context the workspace shell provides to nested views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `WorkspacePage` owns every field here; channel lists, DM lists, modals,
//! and the nested channel/DM pages read them via `expect_context`.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Channel, Member, User};
use crate::state::query::{QueryState, spawn_query};
use crate::state::ui::UiFlags;

/// Name of the channel every workspace starts with; workspace links land here.
pub const DEFAULT_CHANNEL: &str = "일반";

/// Shared handles for the active workspace.
#[derive(Clone, Copy)]
pub struct WorkspaceContext {
    /// Slug of the active workspace from the route.
    pub workspace: Signal<Option<String>>,
    pub user: RwSignal<QueryState<User>>,
    pub channels: RwSignal<QueryState<Vec<Channel>>>,
    pub members: RwSignal<QueryState<Vec<Member>>>,
    pub flags: RwSignal<UiFlags>,
    /// Member ids reported online by the realtime server.
    pub online: RwSignal<Vec<i64>>,
    /// Channel shown by the nested channel page; target of channel invites.
    pub active_channel: RwSignal<Option<String>>,
}

impl WorkspaceContext {
    /// Re-fetch `GET /api/users`.
    pub fn reload_user(&self) {
        spawn_query(self.user, api::fetch_current_user());
    }

    /// Re-fetch the channel list of the active workspace.
    pub fn reload_channels(&self) {
        if let Some(workspace) = self.workspace.get_untracked() {
            spawn_query(self.channels, async move { api::fetch_channels(&workspace).await });
        }
    }

    /// Re-fetch the member list of the active workspace.
    pub fn reload_members(&self) {
        if let Some(workspace) = self.workspace.get_untracked() {
            spawn_query(self.members, async move { api::fetch_members(&workspace).await });
        }
    }
}

/// Route of a channel inside a workspace. Both names are path-encoded.
pub fn channel_href(workspace: &str, channel: &str) -> String {
    format!(
        "/workspace/{}/channel/{}",
        urlencoding::encode(workspace),
        urlencoding::encode(channel)
    )
}

/// Route of a direct-message thread inside a workspace.
pub fn dm_href(workspace: &str, member_id: i64) -> String {
    format!("/workspace/{}/dm/{member_id}", urlencoding::encode(workspace))
}

/// Landing route for a workspace.
pub fn default_channel_href(workspace: &str) -> String {
    channel_href(workspace, DEFAULT_CHANNEL)
}

/// Find a member by id in a loaded member list.
pub fn find_member(members: &[Member], id: i64) -> Option<&Member> {
    members.iter().find(|m| m.id == id)
}
