//! Channel page. Header with the channel name and an invite action, and a
//! composer that posts to the channel.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_box::{ChatBox, can_send};
use crate::state::toast::ToastState;
use crate::state::ui::UiFlag;
use crate::state::workspace::WorkspaceContext;

#[component]
pub fn ChannelPage() -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let channel = Memo::new(move |_| params.read().get("channel"));
    let draft = RwSignal::new(String::new());

    // Channel invites target whatever channel is on screen.
    Effect::new(move || ctx.active_channel.set(channel.get()));
    on_cleanup(move || {
        let _ = ctx.active_channel.try_set(None);
    });

    let on_change = Callback::new(move |value: String| draft.set(value));
    let on_submit = Callback::new(move |()| {
        let content = draft.get_untracked();
        if !can_send(&content) {
            return;
        }
        let (Some(workspace), Some(channel)) = (ctx.workspace.get_untracked(), channel.get_untracked()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::PostChatRequest { content };
            match crate::net::api::post_channel_chat(&workspace, &channel, &request).await {
                Ok(()) => draft.set(String::new()),
                Err(e) => {
                    leptos::logging::error!("post to #{channel} failed: {e:?}");
                    crate::components::toast::notify_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (workspace, channel, content, toasts);
    });

    let title = move || format!("#{}", channel.get().unwrap_or_default());
    let placeholder = format!("Message #{}", channel.get_untracked().unwrap_or_default());

    view! {
        <div class="channel-page">
            <header class="channel-page__header">
                <span class="channel-page__title">{title}</span>
                <div class="channel-page__actions">
                    <span class="channel-page__count">
                        {move || ctx.members.with(|q| q.data.as_ref().map_or(0, Vec::len))}
                    </span>
                    <button
                        class="btn btn--ghost"
                        title="Invite to channel"
                        on:click=move |_| ctx.flags.update(|f| f.open(UiFlag::InviteChannel))
                    >
                        "Invite"
                    </button>
                </div>
            </header>
            <div class="channel-page__chats"></div>
            <ChatBox draft=draft on_change=on_change on_submit=on_submit placeholder=placeholder/>
        </div>
    }
}
