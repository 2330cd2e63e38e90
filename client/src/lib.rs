//! # tasklist-client
//!
//! Leptos + WASM frontend for the task list application.
//!
//! The task list route is gated behind an access token kept in the browser's
//! `localStorage`. `routes` holds the static routing table with per-route
//! `requires_auth` flags, `guard` makes the access decision, and
//! `state::auth` owns the token store behind an injectable session.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!("logger init failed: {e}")));
    }
    leptos::mount::hydrate_body(app::App);
}
