//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace chrome and the message composer while
//! reading shared state from Leptos context providers.

pub mod channel_list;
pub mod chat_box;
pub mod create_channel_modal;
pub mod dm_list;
pub mod invite_channel_modal;
pub mod invite_workspace_modal;
pub mod menu;
pub mod modal;
pub mod toast;
pub mod workspace_switcher;
