//! # Portfolio Web
//!
//! Client-side rendered single-page portfolio. Seven full-viewport slides on
//! a horizontal track, an animated particle canvas behind them, and content
//! hydrated from the portfolio API with built-in defaults for every section.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod panels;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Portfolio app starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
