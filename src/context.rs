//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload objectives from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload objectives from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// How long toasts stay visible
    pub toast_duration_ms: u32,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), toast_duration_ms: u32) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toast_duration_ms,
        }
    }

    /// Trigger a reload of objectives
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
