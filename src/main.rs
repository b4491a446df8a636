//! Checklist Frontend Entry Point

mod models;
mod storage;
mod config;
mod state;
mod auth;
mod filter;
mod theme;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("Starting checklist");
    mount_to_body(App);
}
