//! Direct message page for one workspace member.

#[cfg(test)]
#[path = "direct_message_test.rs"]
mod direct_message_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_box::{ChatBox, can_send};
use crate::state::toast::ToastState;
use crate::state::workspace::{WorkspaceContext, find_member};
use crate::util::avatar::{AvatarStyle, HEADER_AVATAR_SIZE, gravatar_url};

/// Member id from the `:id` route segment. Non-numeric ids match nobody.
pub(crate) fn parse_member_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn DirectMessagePage() -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let member_id = Memo::new(move |_| parse_member_id(params.read().get("id").as_deref()));
    let draft = RwSignal::new(String::new());

    let member = Memo::new(move |_| {
        let id = member_id.get()?;
        ctx.members
            .with(|q| q.data.as_deref().and_then(|members| find_member(members, id).cloned()))
    });

    let on_change = Callback::new(move |value: String| draft.set(value));
    let on_submit = Callback::new(move |()| {
        let content = draft.get_untracked();
        if !can_send(&content) {
            return;
        }
        let (Some(workspace), Some(id)) = (ctx.workspace.get_untracked(), member_id.get_untracked()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::PostChatRequest { content };
            match crate::net::api::post_dm_chat(&workspace, id, &request).await {
                Ok(()) => draft.set(String::new()),
                Err(e) => {
                    leptos::logging::error!("direct message to {id} failed: {e:?}");
                    crate::components::toast::notify_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (workspace, id, content, toasts);
    });

    let nickname = move || member.with(|m| m.as_ref().map(|m| m.nickname.clone()).unwrap_or_default());
    let avatar = move || {
        member.with(|m| {
            m.as_ref()
                .map(|m| gravatar_url(&m.email, HEADER_AVATAR_SIZE, AvatarStyle::Retro))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dm-page">
            <header class="dm-page__header">
                <Show when=move || member.with(Option::is_some) fallback=|| view! { <span>"Unknown member"</span> }>
                    <img class="dm-page__avatar" src=avatar alt=nickname/>
                    <span class="dm-page__name">{nickname}</span>
                </Show>
            </header>
            <div class="dm-page__chats"></div>
            <ChatBox draft=draft on_change=on_change on_submit=on_submit/>
        </div>
    }
}
