//! User Directory Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(config::LOG_LEVEL, config::LOG_BUFFER_CAPACITY) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
