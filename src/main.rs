//! Bid Platform Frontend Entry Point

mod activity;
mod app;
mod components;
mod config;
mod context;
mod download;
mod error;
mod format;
mod icon;
mod markdown;
mod mock_data;
mod models;
mod notifications;
mod pages;
mod proposal;
mod store;
mod theme;
mod tree;
mod validation;
mod workflow;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
