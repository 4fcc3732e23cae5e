//! Taskdeck Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod navigation;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;
use taskdeck_client::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = ClientConfig::from_build_env();
    log::set_max_level(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
