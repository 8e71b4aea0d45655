pub mod app;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;
pub mod shell_config;

use contracts::shell::ShellConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shell_config::{MountGate, CONFIG_WAIT_MS};
use wasm_bindgen::prelude::wasm_bindgen;

fn mount(config: ShellConfig) {
    log::info!(
        "shell views: {:?}",
        config.views.iter().map(|v| v.slug()).collect::<Vec<_>>()
    );
    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let gate = MountGate::default();

    let fetched = gate.clone();
    spawn_local(async move {
        let config = shell_config::load_shell_config().await;
        if fetched.claim() {
            mount(config);
        } else {
            log::warn!("shell config arrived after {} ms, ignored", CONFIG_WAIT_MS);
        }
    });

    spawn_local(async move {
        TimeoutFuture::new(CONFIG_WAIT_MS).await;
        if gate.claim() {
            log::warn!("no shell config after {} ms; using defaults", CONFIG_WAIT_MS);
            mount(ShellConfig::default());
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
