//! `catalog-web`
//!
//! Browser view over `GET /api/products`: checkbox filters, a sortable
//! table, and pagination. The Leptos components and the HTTP call only
//! build for `wasm32`; the view state they drive is plain Rust.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;

pub use state::{Phase, ProductView};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
