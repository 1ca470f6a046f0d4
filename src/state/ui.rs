//! Local UI chrome state for the workspace shell (menus and modals).
//!
//! DESIGN
//! ======
//! Each menu/modal is its own boolean slot with open/close transitions.
//! Nothing enforces mutual exclusion: several modals may be open at once.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Names of the independent visibility slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiFlag {
    UserMenu,
    WorkspaceMenu,
    CreateWorkspace,
    CreateChannel,
    InviteWorkspace,
    InviteChannel,
}

/// Visibility of every shell menu and modal. All start closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub user_menu: bool,
    pub workspace_menu: bool,
    pub create_workspace: bool,
    pub create_channel: bool,
    pub invite_workspace: bool,
    pub invite_channel: bool,
}

impl UiFlags {
    fn slot(&mut self, flag: UiFlag) -> &mut bool {
        match flag {
            UiFlag::UserMenu => &mut self.user_menu,
            UiFlag::WorkspaceMenu => &mut self.workspace_menu,
            UiFlag::CreateWorkspace => &mut self.create_workspace,
            UiFlag::CreateChannel => &mut self.create_channel,
            UiFlag::InviteWorkspace => &mut self.invite_workspace,
            UiFlag::InviteChannel => &mut self.invite_channel,
        }
    }

    pub fn is_open(&self, flag: UiFlag) -> bool {
        match flag {
            UiFlag::UserMenu => self.user_menu,
            UiFlag::WorkspaceMenu => self.workspace_menu,
            UiFlag::CreateWorkspace => self.create_workspace,
            UiFlag::CreateChannel => self.create_channel,
            UiFlag::InviteWorkspace => self.invite_workspace,
            UiFlag::InviteChannel => self.invite_channel,
        }
    }

    pub fn open(&mut self, flag: UiFlag) {
        *self.slot(flag) = true;
    }

    pub fn close(&mut self, flag: UiFlag) {
        *self.slot(flag) = false;
    }

    pub fn toggle(&mut self, flag: UiFlag) {
        let slot = self.slot(flag);
        *slot = !*slot;
    }

    /// Shared dismiss handler for the four modal dialogs. Menus are left
    /// alone; they close through their own toggles.
    pub fn dismiss_modals(&mut self) {
        self.create_workspace = false;
        self.create_channel = false;
        self.invite_workspace = false;
        self.invite_channel = false;
    }
}
