//! Modal for creating a channel in the active workspace.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiFlag;
use crate::state::workspace::WorkspaceContext;
use crate::util::text::is_blank;

#[component]
pub fn CreateChannelModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let show = Signal::derive(move || ctx.flags.with(|f| f.create_channel));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked();
        if is_blank(&value) {
            return;
        }
        let Some(workspace) = ctx.workspace.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::CreateChannelRequest { name: value };
            match crate::net::api::create_channel(&workspace, &request).await {
                Ok(()) => {
                    ctx.reload_channels();
                    ctx.flags.update(|f| f.close(UiFlag::CreateChannel));
                    name.set(String::new());
                }
                Err(e) => {
                    leptos::logging::error!("create channel failed: {e}");
                    crate::components::toast::notify_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (workspace, value, toasts);
    };

    view! {
        <Modal show=show on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label class="dialog__label">
                    <span>"Channel name"</span>
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">"Create"</button>
            </form>
        </Modal>
    }
}
