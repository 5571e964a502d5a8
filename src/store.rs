//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use objective_core::Notification;
use crate::models::{SavedObjective, Session, Toast};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Saved objectives of the signed-in user
    pub objectives: Vec<SavedObjective>,
    /// Signed-in user, None when signed out
    pub session: Option<Session>,
    /// Toasts currently on screen
    pub toasts: Vec<Toast>,
    /// Last issued toast id
    pub last_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_objectives(store: &AppStore, objectives: Vec<SavedObjective>) {
    *store.objectives().write() = objectives;
}

pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    *store.session().write() = session;
}

pub fn store_is_signed_in(store: &AppStore) -> bool {
    store.session().with_untracked(Option::is_some)
}

/// Add a toast and return its id
pub fn store_push_toast(store: &AppStore, notification: Notification) -> u64 {
    let id = {
        let last_field = store.last_toast_id();
        let mut last = last_field.write();
        *last += 1;
        *last
    };
    store.toasts().write().push(Toast {
        id,
        kind: notification.kind,
        message: notification.message,
    });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
