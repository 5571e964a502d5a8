//! Objective Manager App
//!
//! Root component: provides state, loads the session and objectives,
//! and renders the layout with the create form and the saved list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{self, CommandSubmitter, SaveTarget};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_set_objectives, store_set_session, AppState};
use crate::components::{Layout, ObjectiveForm, ObjectiveList, SubmitFunction, Toaster};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config.toast_duration_ms));

    // Load session on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::current_user().await {
                Ok(session) => store_set_session(&store, session),
                Err(e) => log::warn!("[APP] Could not load session: {}", e),
            }
        });
    });

    // Load objectives when trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading objectives, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_objectives().await {
                Ok(loaded) => {
                    log::debug!("[APP] Loaded {} objectives", loaded.len());
                    store_set_objectives(&store, loaded);
                }
                Err(e) => log::warn!("[APP] Could not load objectives: {}", e),
            }
        });
    });

    view! {
        <Layout>
            <NewObjective />
            <ObjectiveList />
        </Layout>
        <Toaster />
    }
}

/// Create form wired to the host's `create_objective` command
#[component]
fn NewObjective() -> impl IntoView {
    let ctx = use_app_context();
    let (saving, set_saving) = signal(false);
    let submit_function = SubmitFunction::new(CommandSubmitter::new(SaveTarget::Create, set_saving, ctx));

    view! {
        <section class="new-objective">
            <ObjectiveForm loading=saving submit_function=submit_function />
        </section>
    }
}
