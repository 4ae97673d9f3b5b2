//! WASM entry point: logging, panic hook, mount.
//!
//! Built with `trunk` (see `index.html`).

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_ok() {
        log::info!("jtlab {} starting", env!("CARGO_PKG_VERSION"));
    }

    leptos::mount::mount_to_body(client::app::App);
}
