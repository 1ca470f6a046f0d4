//! Workspace page: the authenticated shell around channel and DM routes.
//!
//! ARCHITECTURE
//! ============
//! This component owns everything stateful for one workspace: the user,
//! channel, and member queries, the realtime socket, the menu/modal flags,
//! and the create-workspace form. Nested pages read it through
//! `WorkspaceContext` and render inside the `<Outlet/>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A failed user fetch is the only terminal path: the page renders a
//! redirect to `/login` and nothing else. Logout works by invalidating the
//! session and re-fetching the user, which then fails into that path.
//!
//! TRADE-OFFS
//! ==========
//! Feedback differs per action. A failed logout shows a toast; a
//! failed workspace creation is only logged; an invalid creation form is
//! silently ignored.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_params_map;

use crate::components::channel_list::ChannelList;
use crate::components::create_channel_modal::CreateChannelModal;
use crate::components::dm_list::DmList;
use crate::components::invite_channel_modal::InviteChannelModal;
use crate::components::invite_workspace_modal::InviteWorkspaceModal;
use crate::components::menu::Menu;
use crate::components::modal::Modal;
use crate::components::workspace_switcher::WorkspaceSwitcher;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::socket::{LOGIN_EVENT, SocketSlot, WorkspaceSocket, parse_online_list, presence_payload};
use crate::net::types::{SocketEvent, User};
use crate::state::query::QueryState;
use crate::state::toast::ToastState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::toast::ToastLevel;
use crate::state::ui::{UiFlag, UiFlags};
use crate::state::workspace::WorkspaceContext;
use crate::state::workspace_form::WorkspaceForm;
use crate::util::avatar::{AvatarStyle, HEADER_AVATAR_SIZE, PROFILE_AVATAR_SIZE, gravatar_url};

/// What the shell renders for a given user-query state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ShellView {
    /// No user yet and no error.
    Loading,
    /// User loaded; render the layout.
    Ready,
    /// The user fetch failed; render only the login redirect.
    Redirect,
}

pub(crate) fn shell_view(user: &QueryState<User>) -> ShellView {
    if user.error.is_some() {
        ShellView::Redirect
    } else if user.is_loaded() {
        ShellView::Ready
    } else {
        ShellView::Loading
    }
}

/// Channel and member lists load once a user exists, and again whenever the
/// workspace slug changes.
pub(crate) fn should_load_lists(has_user: bool, workspace: Option<&str>, loaded_for: Option<&str>) -> bool {
    has_user && workspace.is_some() && workspace != loaded_for
}

/// Display name of the active workspace, falling back to its slug.
pub(crate) fn workspace_name(user: Option<&User>, slug: Option<&str>) -> String {
    let Some(slug) = slug else {
        return String::new();
    };
    user.and_then(|u| u.workspaces.iter().find(|w| w.url == slug))
        .map_or_else(|| slug.to_owned(), |w| w.name.clone())
}

/// Apply an accepted workspace creation: close its modal and clear the form.
/// Other flags are left as they are.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn workspace_created(flags: &mut UiFlags, form: &mut WorkspaceForm) {
    flags.close(UiFlag::CreateWorkspace);
    form.reset();
}

/// Feedback for a failed logout: an error notice with the server's text.
/// Returns the notice id so the caller can schedule its expiry.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn logout_failed(toasts: &mut ToastState, err: &ApiError) -> String {
    toasts.push(ToastLevel::Error, err.user_message())
}

/// Workspace shell: header with profile menu, workspace rail, channel/DM
/// navigation, nested routed content, and the four modals.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let workspace: Signal<Option<String>> = Memo::new(move |_| params.read().get("workspace")).into();

    let user = RwSignal::new(QueryState::<User>::default());
    let channels = RwSignal::new(QueryState::default());
    let members = RwSignal::new(QueryState::default());
    let flags = RwSignal::new(UiFlags::default());
    let online = RwSignal::new(Vec::<i64>::new());
    let active_channel = RwSignal::new(None::<String>);
    let form = RwSignal::new(WorkspaceForm::default());

    let ctx = WorkspaceContext {
        workspace,
        user,
        channels,
        members,
        flags,
        online,
        active_channel,
    };
    provide_context(ctx);

    // PHASE: QUERIES
    ctx.reload_user();

    let has_user = Memo::new(move |_| user.with(QueryState::is_loaded));
    let lists_loaded_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let next = workspace.get();
        let loaded_for = lists_loaded_for.get_untracked();
        if !should_load_lists(has_user.get(), next.as_deref(), loaded_for.as_deref()) {
            return;
        }
        channels.update(QueryState::reset);
        members.update(QueryState::reset);
        lists_loaded_for.set(next);
        ctx.reload_channels();
        ctx.reload_members();
    });

    // PHASE: REALTIME CONNECTION
    // The slot releases the previous workspace's socket before acquiring the
    // next one; cleanup releases whatever is held when the shell unmounts.
    let slot = SocketSlot::default();
    let socket = RwSignal::new(None::<WorkspaceSocket>);
    let on_socket_event = Callback::new(move |event: SocketEvent| {
        if let Some(ids) = parse_online_list(&event) {
            online.set(ids);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let effect_slot = slot.clone();
        Effect::new(move || {
            let next = workspace.get();
            let held = crate::net::socket::retarget_slot(&effect_slot, next.as_deref(), on_socket_event);
            if socket.get_untracked() != held {
                online.set(Vec::new());
                socket.set(held);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_socket_event;

    on_cleanup({
        let slot = slot.clone();
        move || {
            #[cfg(feature = "hydrate")]
            {
                if let Some(old) = crate::net::socket::with_registry(|registry| slot.clear(registry)) {
                    leptos::logging::log!("released socket for {}", old.workspace());
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = slot;
        }
    });

    // PHASE: PRESENCE ANNOUNCE
    // Fires whenever the socket, user, or channel list changes and all three
    // are present. Repeat announces are accepted by the server.
    Effect::new(move || {
        let Some(socket) = socket.get() else {
            return;
        };
        let payload = user.with(|u| channels.with(|c| presence_payload(u.data.as_ref(), c.data.as_deref())));
        let Some(payload) = payload else {
            return;
        };
        if let Err(e) = socket.emit(LOGIN_EVENT, &payload) {
            leptos::logging::warn!("presence announce failed: {e}");
        }
    });

    // PHASE: ACTIONS
    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::logout().await {
                Ok(()) => ctx.reload_user(),
                Err(e) => {
                    leptos::logging::error!("logout failed: {e:?}");
                    if let Some(id) = toasts.try_update(|t| logout_failed(t, &e)) {
                        crate::components::toast::schedule_dismiss(toasts, id);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toasts;
    });

    let on_create_workspace = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.with_untracked(WorkspaceForm::validate) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_workspace(&request).await {
                Ok(()) => {
                    ctx.reload_user();
                    flags.update(|f| form.update(|fields| workspace_created(f, fields)));
                }
                Err(e) => leptos::logging::error!("create workspace failed: {e:?}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_close_modal = Callback::new(move |()| flags.update(UiFlags::dismiss_modals));
    let toggle_user_menu = Callback::new(move |()| flags.update(|f| f.toggle(UiFlag::UserMenu)));
    let toggle_workspace_menu = Callback::new(move |()| flags.update(|f| f.toggle(UiFlag::WorkspaceMenu)));
    let open_create_workspace = Callback::new(move |()| flags.update(|f| f.open(UiFlag::CreateWorkspace)));

    let user_menu_open = Signal::derive(move || flags.with(|f| f.user_menu));
    let workspace_menu_open = Signal::derive(move || flags.with(|f| f.workspace_menu));
    let create_workspace_open = Signal::derive(move || flags.with(|f| f.create_workspace));

    let nickname = move || user.with(|q| q.data.as_ref().map(|u| u.nickname.clone()).unwrap_or_default());
    let avatar = move |size: u32| {
        user.with(|q| {
            q.data
                .as_ref()
                .map(|u| gravatar_url(&u.email, size, AvatarStyle::Retro))
                .unwrap_or_default()
        })
    };
    let display_name = move || user.with(|q| workspace_name(q.data.as_ref(), workspace.get().as_deref()));

    let view_state = Memo::new(move |_| user.with(shell_view));

    move || match view_state.get() {
        ShellView::Redirect => view! { <Redirect path="/login"/> }.into_any(),
        ShellView::Loading => view! {
            <div class="workspace-page workspace-page--loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        ShellView::Ready => view! {
            <div class="workspace-page">
                <header class="workspace-header">
                    <div class="workspace-header__right">
                        <button
                            class="workspace-header__profile"
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                toggle_user_menu.run(());
                            }
                        >
                            <img
                                class="workspace-header__avatar"
                                src=move || avatar(HEADER_AVATAR_SIZE)
                                alt=nickname
                            />
                        </button>
                        <Menu show=user_menu_open on_close=toggle_user_menu class="menu--profile">
                            <div class="profile-menu">
                                <img
                                    class="profile-menu__avatar"
                                    src=move || avatar(PROFILE_AVATAR_SIZE)
                                    alt=nickname
                                />
                                <div class="profile-menu__info">
                                    <span class="profile-menu__name">{nickname}</span>
                                    <span class="profile-menu__status">"Active"</span>
                                </div>
                            </div>
                            <button class="profile-menu__logout" on:click=move |_| on_logout.run(())>
                                "Log out"
                            </button>
                        </Menu>
                    </div>
                </header>
                <div class="workspace-wrapper">
                    <WorkspaceSwitcher on_create=open_create_workspace/>
                    <aside class="channels">
                        <button class="channels__workspace-name" on:click=move |_| toggle_workspace_menu.run(())>
                            {display_name}
                        </button>
                        <div class="channels__scroll">
                            <Menu show=workspace_menu_open on_close=toggle_workspace_menu class="menu--workspace">
                                <div class="workspace-menu">
                                    <h2>{display_name}</h2>
                                    <button on:click=move |_| flags.update(|f| f.open(UiFlag::InviteWorkspace))>
                                        "Invite people to workspace"
                                    </button>
                                    <button on:click=move |_| flags.update(|f| f.open(UiFlag::CreateChannel))>
                                        "Create channel"
                                    </button>
                                    <button on:click=move |_| on_logout.run(())>"Log out"</button>
                                </div>
                            </Menu>
                            <ChannelList/>
                            <DmList/>
                        </div>
                    </aside>
                    <main class="chats">
                        <Outlet/>
                    </main>
                </div>
                <Modal show=create_workspace_open on_close=on_close_modal>
                    <form class="dialog__form" on:submit=on_create_workspace>
                        <label class="dialog__label">
                            <span>"Workspace name"</span>
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            <span>"Workspace url"</span>
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || form.with(|f| f.url.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.url = value);
                                }
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">"Create"</button>
                    </form>
                </Modal>
                <CreateChannelModal on_close=on_close_modal/>
                <InviteWorkspaceModal on_close=on_close_modal/>
                <InviteChannelModal on_close=on_close_modal/>
            </div>
        }
        .into_any(),
    }
}
