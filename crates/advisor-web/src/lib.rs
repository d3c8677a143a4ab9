//! moneyminder Web Frontend
//!
//! Leptos-based WASM frontend: marketing landing page plus the budget
//! advisor form.

mod app;
mod charts;
mod components;
mod delay;
mod pages;
mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
