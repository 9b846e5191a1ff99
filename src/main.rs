//! Taskboard Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod format;
mod navigator;
mod pages;
mod session;
mod store;
mod transport;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger(console_logger::parse_level(config::LOG_LEVEL)) {
        web_sys::console::error_1(&format!("logger already set: {}", e).into());
    }
    log::info!("taskboard starting, api at {}", config::API_URL);
    mount_to_body(App);
}
