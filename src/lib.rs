//! # realty-trends
//!
//! Leptos + WASM dashboard for published real-estate transaction data.
//!
//! A static data root holds a manifest, per-category record files, a monthly
//! aggregate, and an observation log. The dashboard lists the record files,
//! renders one as a table with a summary, and draws two trend charts through
//! the page's Chart.js global.
//!
//! Pure state transitions live in `state`; `controller` wires them to signals
//! and fetches; `components` and `pages` render them.

pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
