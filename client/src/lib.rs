//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate holds the contact form and project showcase state machines,
//! the network seam for contact submissions, the built-in project catalog,
//! and the components and pages that render them. The `portfolio` server
//! renders it with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
