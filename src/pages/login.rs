//! Login page. Target of the shell's redirect when no session exists.

use leptos::prelude::*;

/// Signed-out landing view.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Teamchat"</h1>
                <p class="login-card__subtitle">"You are not signed in."</p>
                <p class="login-message">"Sign in with your account, then open a workspace link again."</p>
            </div>
        </div>
    }
}
