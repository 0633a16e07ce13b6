#![allow(warnings)]
//! Epitrello Frontend Entry Point

mod commands;
mod context;
mod drag;
mod storage;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = commands::config();
    if let Err(e) = rolling_logger::init(config.log_level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
    }
    log::info!("[APP] starting, api at {}", config.api_url);
    mount_to_body(App);
}
