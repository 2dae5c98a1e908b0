//! # portfolio
//!
//! Leptos + WASM frontend for the portfolio website: navbar and page
//! chrome, the hero typing animation, the contact form controller, and
//! shared scroll and reveal helpers, parameterized per page instead of
//! copied per page.
//!
//! This crate contains pages, components, application state, the network
//! boundary for the contact form, and browser utility wiring. The typing
//! animation itself lives in the `typewriter` crate and is driven here by
//! the `TypingText` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger was already initialized");
    }

    leptos::mount::hydrate_body(App);
}
