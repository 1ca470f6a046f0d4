//! Left rail with one button per workspace membership.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::workspace::{WorkspaceContext, default_channel_href};
use crate::util::text::initial;

/// Workspace buttons linking to each workspace's default channel, plus the
/// create-workspace trigger.
#[component]
pub fn WorkspaceSwitcher(on_create: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();

    view! {
        <nav class="workspaces">
            {move || {
                let active = ctx.workspace.get();
                ctx.user
                    .with(|q| q.data.as_ref().map(|u| u.workspaces.clone()).unwrap_or_default())
                    .into_iter()
                    .map(|ws| {
                        let is_active = active.as_deref() == Some(ws.url.as_str());
                        view! {
                            <A href=default_channel_href(&ws.url)>
                                <span
                                    class="workspaces__button"
                                    class:workspaces__button--active=is_active
                                    title=ws.name.clone()
                                >
                                    {initial(&ws.name)}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()
            }}
            <button class="workspaces__add" on:click=move |_| on_create.run(()) title="Create workspace">
                "+"
            </button>
        </nav>
    }
}
