#![allow(warnings)]
//! Objective Manager Frontend Entry Point

mod config;
mod logger;
mod models;
mod commands;
mod context;
mod store;
mod auth;
mod toast;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logger::init(&config);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
