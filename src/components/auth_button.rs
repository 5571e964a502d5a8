//! Auth Button Component
//!
//! Sign-in / sign-out control backed by the host's auth commands.

use leptos::prelude::*;
use leptos::task::spawn_local;
use objective_core::{Notification, Notifier};

use crate::commands;
use crate::store::{store_set_session, use_app_store, AppStateStoreFields};
use crate::toast::use_toast;

#[component]
pub fn AuthButton() -> impl IntoView {
    let store = use_app_store();
    let toast = use_toast();

    let sign_in = move |_| {
        spawn_local(async move {
            match commands::sign_in().await {
                Ok(session) => {
                    log::info!("[AUTH] Signed in as {}", session.display_name);
                    store_set_session(&store, Some(session));
                }
                Err(e) => {
                    log::warn!("[AUTH] Sign-in failed: {}", e);
                    toast.notify(Notification::error("ログインに失敗しました"));
                }
            }
        });
    };

    let sign_out = move |_| {
        spawn_local(async move {
            match commands::sign_out().await {
                Ok(()) => {
                    log::info!("[AUTH] Signed out");
                    store_set_session(&store, None);
                }
                Err(e) => {
                    log::warn!("[AUTH] Sign-out failed: {}", e);
                    toast.notify(Notification::error("ログアウトに失敗しました"));
                }
            }
        });
    };

    move || match store.session().get() {
        Some(session) => view! {
            <div class="auth">
                <span class="auth-user">{session.display_name}</span>
                <button class="auth-btn" on:click=sign_out>"ログアウト"</button>
            </div>
        }
        .into_any(),
        None => view! {
            <button class="auth-btn" on:click=sign_in>"ログイン"</button>
        }
        .into_any(),
    }
}
