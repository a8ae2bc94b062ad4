//! # client
//!
//! Leptos + WASM frontend for the product admin app.
//!
//! This crate contains the pages, components, application state, and network
//! helpers. The server crate renders it with the `ssr` feature; the browser
//! bundle is built with `hydrate` and calls [`hydrate`] on load.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
