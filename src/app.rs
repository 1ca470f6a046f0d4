//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    channel::ChannelPage, direct_message::DirectMessagePage, login::LoginPage, workspace::WorkspacePage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the app-wide toast context and sets up client-side routing. The
/// workspace shell provides its own route-scoped context to nested pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/teamchat.css"/>
        <Title text="Teamchat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <ParentRoute path=(StaticSegment("workspace"), ParamSegment("workspace")) view=WorkspacePage>
                    <Route path=(StaticSegment("channel"), ParamSegment("channel")) view=ChannelPage/>
                    <Route path=(StaticSegment("dm"), ParamSegment("id")) view=DirectMessagePage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
