//! # client
//!
//! Leptos + WASM frontend for the Bookshelf library service.
//!
//! This crate contains the route-level pages, shared components, reactive
//! session/notification state, browser token storage, and the REST calls to
//! the remote library API. Domain types and view state machines come from the
//! `catalog` crate so they stay testable off the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
