//! # client
//!
//! Leptos + WASM frontend for the interactive candidates site.
//!
//! This crate contains pages, components, page state, the scripted chat, and
//! the directory loader for the remote candidates API. The `hydrate` feature
//! builds the browser bundle; `ssr` builds the shell rendered by the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
