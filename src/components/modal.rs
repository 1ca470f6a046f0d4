//! Centered dialog with backdrop, close button, and Escape handling.
//!
//! Shared by every shell modal; each caller passes its own visibility slot
//! and the shell's dismiss handler.

use leptos::prelude::*;

#[component]
pub fn Modal(#[prop(into)] show: Signal<bool>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || show.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
