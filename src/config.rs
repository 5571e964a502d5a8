//! Frontend Configuration
//!
//! Optional JSON overrides stored in `localStorage`.

use log::LevelFilter;
use serde::Deserialize;

const STORAGE_KEY: &str = "objective-ui:config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// Lines kept by the rolling logger
    pub log_capacity: usize,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_capacity: 200,
            toast_duration_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Read overrides from local storage, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                // Logger is not installed yet
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring invalid {}: {}", STORAGE_KEY, e).into());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
