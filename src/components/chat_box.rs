//! Message composer: a controlled textarea plus send button.
//!
//! DESIGN
//! ======
//! The composer holds no state of its own. The parent owns the draft and
//! receives `on_change` for every edit and `on_submit` for every send
//! intent; clearing the draft after a successful send is the parent's job.

#[cfg(test)]
#[path = "chat_box_test.rs"]
mod chat_box_test;

use leptos::prelude::*;

use crate::util::text::is_blank;

const SEND_BUTTON_CLASS: &str = "chat-box__send";
const SEND_BUTTON_DISABLED_CLASS: &str = "chat-box__send--disabled";

/// What a keydown in the composer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Suppress the newline and submit.
    Submit,
    /// Let the textarea handle the key.
    Default,
}

/// Enter without Shift submits. Shift+Enter and IME composition fall
/// through to the textarea.
pub fn keydown_action(key: &str, shift: bool, composing: bool) -> KeyAction {
    if key == "Enter" && !shift && !composing {
        KeyAction::Submit
    } else {
        KeyAction::Default
    }
}

/// The send control is enabled only for drafts with visible text.
pub fn can_send(draft: &str) -> bool {
    !is_blank(draft)
}

/// Whether a key action should reach `on_submit`.
pub fn should_submit(draft: &str, action: KeyAction) -> bool {
    action == KeyAction::Submit && can_send(draft)
}

/// Class list for the send button, with the disabled variant when empty.
pub fn send_button_class(draft: &str) -> String {
    if can_send(draft) {
        SEND_BUTTON_CLASS.to_owned()
    } else {
        format!("{SEND_BUTTON_CLASS} {SEND_BUTTON_DISABLED_CLASS}")
    }
}

/// Composer bound to a parent-owned draft.
#[component]
pub fn ChatBox(
    #[prop(into)] draft: Signal<String>,
    on_change: Callback<String>,
    on_submit: Callback<()>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let action = keydown_action(&ev.key(), ev.shift_key(), ev.is_composing());
        if action == KeyAction::Submit {
            ev.prevent_default();
        }
        if should_submit(&draft.get_untracked(), action) {
            on_submit.run(());
        }
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if can_send(&draft.get_untracked()) {
            on_submit.run(());
        }
    };

    view! {
        <div class="chat-box">
            <form class="chat-box__form" on:submit=on_form_submit>
                <textarea
                    class="chat-box__input"
                    rows="1"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="chat-box__toolbox">
                    <button
                        type="submit"
                        class=move || send_button_class(&draft.get())
                        aria-label="Send message"
                        disabled=move || !can_send(&draft.get())
                    >
                        <span class="chat-box__send-icon" aria-hidden="true">"➤"</span>
                    </button>
                </div>
            </form>
        </div>
    }
}
