//! # contact-form
//!
//! Leptos + WASM contact form component.
//!
//! Collects first name, last name, email, and an optional message, validates
//! them live as the user types, and swaps to a read-only confirmation once a
//! valid submission is made. Decision logic lives in `state::form` and
//! `util::validation`; `components` only render state and dispatch events.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; keep the existing logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
