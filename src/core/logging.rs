//! Logging initialization and utilities

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable, e.g. `RUST_LOG=lumberjack=debug`
/// to see which check declined a break.
///
/// # Example
/// ```
/// lumberjack::core::logging::init();
/// log::info!("Plugin loaded");
/// ```
pub fn init() {
    // try_init: hosts may have installed their own logger already
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
