//! # teamchat-client
//!
//! Leptos + WASM frontend for the team-chat workspace: the message composer,
//! the authenticated workspace shell, and the nested channel/DM routes.
//!
//! This crate contains pages, components, client-side state, REST helpers,
//! and the per-workspace socket registry. The backend API and the realtime
//! server are external; this crate only speaks their wire formats.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
