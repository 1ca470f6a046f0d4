//! Popover menu that closes when the backdrop is clicked.

use leptos::prelude::*;

/// Popover anchored by `class` (e.g. `menu--profile`). Clicks inside the
/// menu do not reach the backdrop.
#[component]
pub fn Menu(
    #[prop(into)] show: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let class = format!("menu {class}");

    view! {
        <Show when=move || show.get()>
            <div class="menu__backdrop" on:click=move |_| on_close.run(())>
                <div class=class.clone() on:click=move |ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
