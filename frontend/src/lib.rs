pub mod api;
mod components;
pub mod config;
mod pages;
pub mod resources;
mod router;
pub mod state;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

/// Entry point for the browser bundle. Installs the panic hook and logger,
/// resolves runtime configuration, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting yariga frontend");

    leptos::spawn_local(async {
        config::init().await;
        router::mount_app();
    });
}
