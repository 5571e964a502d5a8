//! Toast Notifications
//!
//! `Notifier` backed by the app store; toasts dismiss themselves after the
//! configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use objective_core::{Notification, Notifier};

use crate::context::use_app_context;
use crate::store::{store_dismiss_toast, store_push_toast, use_app_store, AppStore};

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
    duration_ms: u32,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = store_push_toast(&self.store, notification);
        let store = self.store;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            store_dismiss_toast(&store, id);
        });
    }
}

pub fn use_toast() -> ToastNotifier {
    ToastNotifier {
        store: use_app_store(),
        duration_ms: use_app_context().toast_duration_ms,
    }
}
