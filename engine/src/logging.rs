//! Logging setup for native and browser builds.
//!
//! Native builds use `env_logger` (filter via `RUST_LOG`, default `info`).
//! The browser build forwards records to the developer console and installs
//! a panic hook so panics show up there too.

/// Install the global logger. Safe to call more than once; later calls are
/// no-ops.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
