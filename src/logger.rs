//! Console Logging
//!
//! Installs the rolling logger with a sink that writes to the browser console.

use log::Level;
use rolling_logger::LoggerConfig;

use crate::config::AppConfig;

fn console_sink(level: Level, line: &str) {
    let value: wasm_bindgen::JsValue = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

pub fn init(config: &AppConfig) {
    let logger_config = LoggerConfig {
        level: config.level_filter(),
        capacity: config.log_capacity,
    };
    match rolling_logger::init(logger_config, Some(console_sink)) {
        Ok(_) => log::debug!("logger ready at {}", logger_config.level),
        Err(e) => web_sys::console::warn_1(&format!("[LOGGER] {}", e).into()),
    }
}
