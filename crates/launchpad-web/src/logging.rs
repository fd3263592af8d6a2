//! Browser logging setup
//!
//! Routes `tracing` events to the browser console and installs the panic
//! hook. Safe to call more than once; only the first call takes effect.

use std::sync::Once;

use launchpad_core::config::LogLevel;
use tracing_wasm::WASMLayerConfigBuilder;

static INIT: Once = Once::new();

fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

/// Initialize logging at `level`.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let config = WASMLayerConfigBuilder::new()
            .set_max_level(tracing_level(level))
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}
