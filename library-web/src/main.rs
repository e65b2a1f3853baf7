//! LibraryHub browser UI
//!
//! Leptos CSR front end: admin signup, the signed-in navigation shell, book
//! search and the library/borrow modal.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LibraryHub starting...");

    if let Err(e) = lib_client::init_config() {
        log::error!("Invalid build configuration, using defaults: {}", e);
    }

    utils::dom::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
