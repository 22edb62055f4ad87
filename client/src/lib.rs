//! # client
//!
//! Leptos + WASM frontend for the multi-tenant dashboard.
//!
//! This crate contains pages, presentation components, context-provided
//! state, data hooks, and the browser transport for the backend platform.
//! All persistence, auth, and row-level filtering live on the platform; the
//! code here shapes requests through the `platform` crate and renders the
//! results.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
