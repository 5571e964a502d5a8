//! Toaster Component
//!
//! Renders the toasts held in the app store.

use leptos::prelude::*;
use objective_core::NotificationKind;

use crate::models::Toast;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        NotificationKind::Success => "toast success",
                        NotificationKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
