//! Collapsible list of workspace members for direct messages.
//!
//! Online state comes from the realtime server's `onlineList` event.

#[cfg(test)]
#[path = "dm_list_test.rs"]
mod dm_list_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Member;
use crate::state::workspace::{WorkspaceContext, dm_href};

/// Display label for a member row; the signed-in user is marked.
pub fn member_label(member: &Member, self_id: Option<i64>) -> String {
    if self_id == Some(member.id) {
        format!("{} (me)", member.nickname)
    } else {
        member.nickname.clone()
    }
}

#[component]
pub fn DmList() -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let collapsed = RwSignal::new(false);

    view! {
        <div class="nav-list">
            <h2 class="nav-list__header">
                <button
                    class="nav-list__collapse"
                    class:nav-list__collapse--collapsed=move || collapsed.get()
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                    aria-label="Toggle direct message list"
                >
                    "▾"
                </button>
                <span>"Direct Messages"</span>
            </h2>
            <Show when=move || !collapsed.get()>
                <ul class="nav-list__items">
                    {move || {
                        let workspace = ctx.workspace.get().unwrap_or_default();
                        let self_id = ctx.user.with(|q| q.data.as_ref().map(|u| u.id));
                        let online = ctx.online.get();
                        ctx.members
                            .with(|q| q.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|member| {
                                let href = dm_href(&workspace, member.id);
                                let is_online = online.contains(&member.id);
                                let label = member_label(&member, self_id);
                                view! {
                                    <li class="nav-list__item">
                                        <A href=href>
                                            <span
                                                class="nav-list__presence"
                                                class:nav-list__presence--online=is_online
                                                aria-hidden="true"
                                            ></span>
                                            {label}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
