//! In-page inspector panel shell.
//!
//! Mounts a floating inspector window into the host page and wires the
//! element picker, tab navigation and panels to the tracking core.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod picker;
pub mod unit;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
