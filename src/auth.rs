//! Login Gate
//!
//! Blocks actions while nobody is signed in.

use objective_core::LoginGate;

use crate::store::{store_is_signed_in, use_app_store, AppStore};

/// Reads the session from the app store
#[derive(Clone, Copy)]
pub struct SessionGate {
    store: AppStore,
}

impl LoginGate for SessionGate {
    fn require_login(&self) -> bool {
        !store_is_signed_in(&self.store)
    }
}

/// Gate consulted by forms before they submit
pub fn use_require_login() -> SessionGate {
    SessionGate { store: use_app_store() }
}
