/// Domain Insights - website analytics lookup page
/// Built with Rust + WASM + Yew

pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod submission;
pub mod throttle;
pub mod ui;

pub use error::{InsightsError, Result};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the domain normalizer for JavaScript access
#[wasm_bindgen]
pub fn clean_domain(domain: &str) -> String {
    domain::normalize_domain(domain.trim())
}

// Start the Yew app on the page body
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
