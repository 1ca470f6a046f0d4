//! Create-workspace form state.
//!
//! Invalid input is a silent no-op: `validate` returns `None` and the caller
//! simply returns without touching modal state or showing feedback.

#[cfg(test)]
#[path = "workspace_form_test.rs"]
mod workspace_form_test;

use crate::net::types::CreateWorkspaceRequest;
use crate::util::text::is_blank;

/// Name and URL slug typed into the create-workspace modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceForm {
    pub name: String,
    pub url: String,
}

impl WorkspaceForm {
    /// Request body for valid input, with both fields as typed.
    pub fn validate(&self) -> Option<CreateWorkspaceRequest> {
        if is_blank(&self.name) || is_blank(&self.url) {
            return None;
        }
        Some(CreateWorkspaceRequest {
            workspace: self.name.clone(),
            url: self.url.clone(),
        })
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.url.clear();
    }
}
