//! Objective List Component
//!
//! Saved objectives as cards; each card can switch into an edit form.

use leptos::prelude::*;

use crate::commands::{CommandSubmitter, SaveTarget};
use crate::context::use_app_context;
use crate::models::SavedObjective;
use crate::store::{use_app_store, AppStateStoreFields};

use super::{ObjectiveForm, SubmitFunction};

#[component]
pub fn ObjectiveList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="objective-list">
            <For
                each=move || store.objectives().with(|list| list.iter().map(|o| o.id.clone()).collect::<Vec<_>>())
                key=|id| id.clone()
                children=move |id: String| view! { <ObjectiveCard id=id /> }
            />
        </div>
    }
}

/// Keyed by id so the card (and an open edit form) survives list reloads
#[component]
fn ObjectiveCard(id: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);

    let objective = Memo::new({
        let id = id.clone();
        move |_| store.objectives().with(|list| list.iter().find(|o| o.id == id).cloned())
    });

    let submit_function = SubmitFunction::new(
        CommandSubmitter::new(SaveTarget::Update(id), set_saving, ctx)
            .with_on_saved(Callback::new(move |_| set_editing.set(false))),
    );

    view! {
        <div class="objective-card">
            <Show
                when=move || editing.get()
                fallback=move || objective.get().map(|saved| view! {
                    <ObjectiveSummary objective=saved on_edit=move || set_editing.set(true) />
                })
            >
                // Seeded from the saved objective each time the form opens
                {move || objective.get_untracked().map(|saved| {
                    let init_value = saved.to_objective();
                    let init_item_length = init_value.category_counts();
                    view! {
                        <ObjectiveForm
                            loading=saving
                            submit_function=submit_function
                            init_value=init_value
                            init_item_length=init_item_length
                            is_edit=true
                            edit_close_button=ViewFn::from(move || view! {
                                <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>
                                    "キャンセル"
                                </button>
                            })
                        />
                    }
                })}
            </Show>
        </div>
    }
}

#[component]
fn ObjectiveSummary(objective: SavedObjective, on_edit: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="objective-summary">
            <div class="objective-summary-header">
                <h2 class="objective-summary-title">{objective.title}</h2>
                <button type="button" class="edit-btn" on:click=move |_| on_edit()>"編集"</button>
            </div>
            <ul class="objective-summary-items">
                {objective.objective_items.into_iter().map(|item| view! {
                    <li>
                        <span class="objective-item-label">" - " {item.items_type.info().title} " - "</span>
                        {item.title}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
