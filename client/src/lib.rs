//! # client
//!
//! Leptos site for Alkebulant Labs, rendered on the server and hydrated in
//! the browser.
//!
//! The crate holds the static page content, the catalog search and category
//! filter used by the Solutions and Open Source pages, UI chrome state, and
//! the components and pages built on top of them.

pub mod app;
pub mod catalog;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
