use super::*;

const ALL: [UiFlag; 6] = [
    UiFlag::UserMenu,
    UiFlag::WorkspaceMenu,
    UiFlag::CreateWorkspace,
    UiFlag::CreateChannel,
    UiFlag::InviteWorkspace,
    UiFlag::InviteChannel,
];

// =============================================================
// Defaults
// =============================================================

#[test]
fn every_flag_starts_closed() {
    let flags = UiFlags::default();
    for flag in ALL {
        assert!(!flags.is_open(flag), "{flag:?} should start closed");
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn open_affects_only_its_own_slot() {
    for flag in ALL {
        let mut flags = UiFlags::default();
        flags.open(flag);
        for other in ALL {
            assert_eq!(flags.is_open(other), other == flag);
        }
    }
}

#[test]
fn close_returns_slot_to_closed() {
    let mut flags = UiFlags::default();
    flags.open(UiFlag::CreateWorkspace);
    flags.close(UiFlag::CreateWorkspace);
    assert!(!flags.is_open(UiFlag::CreateWorkspace));
}

#[test]
fn toggle_flips_back_and_forth() {
    let mut flags = UiFlags::default();
    flags.toggle(UiFlag::UserMenu);
    assert!(flags.user_menu);
    flags.toggle(UiFlag::UserMenu);
    assert!(!flags.user_menu);
}

#[test]
fn several_modals_may_be_open_together() {
    let mut flags = UiFlags::default();
    flags.open(UiFlag::CreateWorkspace);
    flags.open(UiFlag::InviteChannel);
    assert!(flags.create_workspace);
    assert!(flags.invite_channel);
}

// =============================================================
// dismiss_modals
// =============================================================

#[test]
fn dismiss_closes_all_four_modals() {
    let mut flags = UiFlags::default();
    flags.open(UiFlag::CreateWorkspace);
    flags.open(UiFlag::CreateChannel);
    flags.open(UiFlag::InviteWorkspace);
    flags.open(UiFlag::InviteChannel);
    flags.dismiss_modals();
    assert_eq!(flags, UiFlags::default());
}

#[test]
fn dismiss_leaves_menus_alone() {
    let mut flags = UiFlags::default();
    flags.open(UiFlag::UserMenu);
    flags.open(UiFlag::WorkspaceMenu);
    flags.dismiss_modals();
    assert!(flags.user_menu);
    assert!(flags.workspace_menu);
}
