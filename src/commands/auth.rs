//! Auth Commands
//!
//! Frontend bindings for the host's sign-in flow.

use wasm_bindgen::JsValue;

use super::call;
use crate::models::Session;

pub async fn current_user() -> Result<Option<Session>, String> {
    call("current_user", JsValue::NULL).await
}

pub async fn sign_in() -> Result<Session, String> {
    call("sign_in", JsValue::NULL).await
}

pub async fn sign_out() -> Result<(), String> {
    call("sign_out", JsValue::NULL).await
}
