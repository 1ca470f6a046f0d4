//! Modal for inviting a user to the active workspace by email.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiFlag;
use crate::state::workspace::WorkspaceContext;
use crate::util::text::is_blank;

#[component]
pub fn InviteWorkspaceModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<WorkspaceContext>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let show = Signal::derive(move || ctx.flags.with(|f| f.invite_workspace));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if is_blank(&value) {
            return;
        }
        let Some(workspace) = ctx.workspace.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = crate::net::types::InviteRequest { email: value };
            match crate::net::api::invite_to_workspace(&workspace, &request).await {
                Ok(()) => {
                    ctx.reload_members();
                    ctx.flags.update(|f| f.close(UiFlag::InviteWorkspace));
                    email.set(String::new());
                }
                Err(e) => {
                    leptos::logging::error!("workspace invite failed: {e}");
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
