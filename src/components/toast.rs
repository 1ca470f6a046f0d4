//! Toast host and helpers for transient notices.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastLevel, ToastState};

/// Show an error notice that expires on its own.
pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(ToastLevel::Error, message)) else {
        return;
    };
    schedule_dismiss(toasts, id);
}

/// Remove notice `id` once its display time has elapsed.
pub fn schedule_dismiss(toasts: RwSignal<ToastState>, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id);
}

/// Bottom-centre stack of active notices. Clicking a notice dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    view! {
                        <button
                            class=format!("toast {}", toast.level.class())
                            on:click=move |_| toasts.update(|t| t.dismiss(&id))
                        >
                            {toast.message}
                        </button>
                    }
                }
            />
        </div>
    }
}
