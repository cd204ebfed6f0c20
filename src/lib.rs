/// Truth Layer - Chrome side panel showing Reddit discussions of the current page
/// Built with Rust + WASM + Yew

pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod observer;
pub mod results;
pub mod thread;
pub mod ui;
pub mod view;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL normalization for JavaScript access
#[wasm_bindgen]
pub fn normalize_url(url: &str) -> String {
    normalize::normalize_url(url, &config::PanelConfig::default())
}

// Start the Yew app for the side panel
#[wasm_bindgen]
pub fn start_panel() {
    yew::Renderer::<ui::panel::Panel>::new().render();
}
