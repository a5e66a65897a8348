//! # client
//!
//! Leptos frontend for the Wellspring marketplace: storefront pages, the
//! cart and checkout flow, and the admin panel.
//!
//! This crate contains pages, components, the auth/cart/notice state
//! containers, and the REST helpers that talk to `/api/*` through the host
//! process. Shared wire types live in the `market` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
