//! # vehicle-board
//!
//! Leptos + WASM presentation layer for a host-embedded vehicle inventory
//! view. The embedding shell loads this crate into a web view, pushes the
//! authoritative vehicle roster in through the exported `updateVehicles`
//! entry point, and observes `window.status` for create/update/delete
//! intents.
//!
//! This crate contains components, application state, and the host bridge.
//! It holds no data of record: every mutation is relayed to the host, which
//! answers with a fresh roster push.

pub mod app;
pub mod components;
pub mod host;
pub mod state;
pub mod util;

/// Wasm entry point. Mounts the board into the host document's body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
