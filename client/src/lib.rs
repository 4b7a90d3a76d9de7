//! # calculate-client
//!
//! Leptos + WASM front end for the price calculator. The arithmetic, storage
//! and debounce rules live in the `calculate` crate; this crate renders the
//! form and binds it to `localStorage`, browser timers and the clipboard.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
