//! # client
//!
//! Leptos frontend for the AI Design Club landing page.
//!
//! The page is static copy plus two behaviors: a persisted light/dark theme
//! (`state::theme`) and smooth-scroll section navigation (`util::scroll`).
//! Browser access lives behind traits in `util` so both run without a DOM in
//! tests.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
