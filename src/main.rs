//! Task Manager Frontend Entry Point

mod api;
mod app;
mod auth;
mod board;
mod components;
mod config;
mod context;
mod error;
mod models;
mod pages;
mod routes;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_logger::init_logger("task-manager-ui", config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    mount_to_body(App);
}
