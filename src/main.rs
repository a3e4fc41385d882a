#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod config;
mod models;
mod dom;
mod validate;
mod theme;
mod store;
mod context;
mod nav;
mod scroll;
mod effects;
mod transport;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
