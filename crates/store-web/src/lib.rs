//! Storefront Web Frontend
//!
//! Leptos-based WASM frontend: product listing, product pages, the cart
//! drawer and the redirect to the hosted checkout page.

mod api;
mod app;
mod components;
mod config;
mod pages;
pub mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
