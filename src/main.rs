//! User & Post Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod pagination;
mod routing;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    log::info!("starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
