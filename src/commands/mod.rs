//! Host Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod objective;
mod auth;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected invoke into a readable message
fn js_error(err: JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::JSON::stringify(&err)
        .ok()
        .map(String::from)
        .unwrap_or_else(|| format!("{:?}", err))
}

async fn call<T: serde::de::DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// Re-export all public items
pub use objective::*;
pub use auth::*;
