//! # campus-hub-client
//!
//! Leptos + WASM frontend for the Campus Hub resource-management service.
//!
//! The crate's core is the session lifecycle: credentials persisted in
//! `localStorage` are reconciled against the identity service once at
//! startup, and a route gate decides which views are reachable from the
//! resulting session state. Pages, layout chrome, and the REST helpers hang
//! off that state through context signals.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
