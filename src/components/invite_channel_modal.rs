//! Modal for inviting a workspace member into the open channel.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiFlag;
use crate::state::workspace::WorkspaceContext;
use crate::util::text::is_blank;

#[component]
pub fn InviteChannelModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let show = Signal::derive(move || ctx.flags.with(|f| f.invite_channel));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if is_blank(&value) {
            return;
        }
        let (Some(workspace), Some(channel)) = (ctx.workspace.get_untracked(), ctx.active_channel.get_untracked())
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::InviteRequest { email: value };
            match crate::net::api::invite_to_channel(&workspace, &channel, &request).await {
                Ok(()) => {
                    ctx.flags.update(|f| f.close(UiFlag::InviteChannel));
                    email.set(String::new());
                }
                Err(e) => {
                    leptos::logging::error!("channel invite failed: {e}");
                    crate::components::toast::notify_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (workspace, channel, value, toasts);
    };

    view! {
        <Modal show=show on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <p class="dialog__subtitle">
                    {move || ctx.active_channel.get().map(|c| format!("Invite to #{c}")).unwrap_or_default()}
                </p>
                <label class="dialog__label">
                    <span>"Email"</span>
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="teammate@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">"Invite"</button>
            </form>
        </Modal>
    }
}
