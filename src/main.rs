//! Yego SheCan Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod content;
mod context;
mod countdown;
mod debounce;
mod download;
mod error;
mod forms;
mod hooks;
mod listing;
mod models;
mod pages;
mod progress;
mod quiz;
mod remote;
mod routes;
mod session;
mod slots;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
