//! Collapsible list of the active workspace's channels.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::workspace::{WorkspaceContext, channel_href};

#[component]
pub fn ChannelList() -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let collapsed = RwSignal::new(false);

    view! {
        <div class="nav-list">
            <h2 class="nav-list__header">
                <button
                    class="nav-list__collapse"
                    class:nav-list__collapse--collapsed=move || collapsed.get()
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                    aria-label="Toggle channel list"
                >
                    "▾"
                </button>
                <span>"Channels"</span>
            </h2>
            <Show when=move || !collapsed.get()>
                <ul class="nav-list__items">
                    {move || {
                        let workspace = ctx.workspace.get().unwrap_or_default();
                        ctx.channels
                            .with(|q| q.data.clone().unwrap_or_default())
                            .into_iter()
                            .map(|channel| {
                                let href = channel_href(&workspace, &channel.name);
                                view! {
                                    <li class="nav-list__item">
                                        <A href=href>
                                            <span class="nav-list__prefix">"# "</span>
                                            {channel.name}
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
