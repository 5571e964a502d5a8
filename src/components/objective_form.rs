//! Objective Form Component
//!
//! Title input plus a dynamic list of categorized sub-items.
//! Items are grouped by category: adding one appends it to the end of its
//! own category block.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use objective_core::{submit_draft, FormMode, ObjectiveDraft, ObjectiveSubmitter, SubmitOutcome};

use crate::auth::use_require_login;
use crate::models::{ItemCategory, Objective, ObjectiveItem};
use crate::toast::use_toast;

/// Injected persistence function for the form.
///
/// Stored locally so it can be captured by `Send` view closures.
#[derive(Clone, Copy)]
pub struct SubmitFunction(StoredValue<Rc<dyn ObjectiveSubmitter>, LocalStorage>);

impl SubmitFunction {
    pub fn new(submitter: impl ObjectiveSubmitter + 'static) -> Self {
        Self(StoredValue::new_local(Rc::new(submitter)))
    }

    fn get(&self) -> Rc<dyn ObjectiveSubmitter> {
        self.0.get_value()
    }
}

#[component]
pub fn ObjectiveForm(
    #[prop(into)] loading: Signal<bool>,
    submit_function: SubmitFunction,
    #[prop(optional)] init_value: Option<Objective>,
    #[prop(optional)] init_item_length: Option<[usize; 5]>,
    #[prop(optional)] is_edit: bool,
    #[prop(optional)] edit_close_button: Option<ViewFn>,
) -> impl IntoView {
    let draft = RwSignal::new(ObjectiveDraft::from_init(init_value, init_item_length));
    let require_login = use_require_login();
    let toast = use_toast();
    let mode = FormMode::from_is_edit(is_edit);

    let handle_submit = move |_| {
        let snapshot = draft.get_untracked();
        let submitter = submit_function.get();
        spawn_local(async move {
            let outcome = submit_draft(&snapshot, mode, &require_login, submitter.as_ref(), &toast).await;
            // The form may have been unmounted while the host was busy
            if !apply_submit_outcome(draft, &outcome) {
                log::debug!("[FORM] Dropped outcome for unmounted form: {:?}", outcome);
            }
        });
    };

    view! {
        <div class="objective-form">
            <fieldset>
                <input
                    class="objective-title-input"
                    placeholder="目標はなに？"
                    prop:value=move || draft.with(|d| d.title().to_string())
                    on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                />
                {move || draft.with(|d| d.title_error().map(|e| e.to_string())).map(|message| view! {
                    <p class="field-error">"※ " {message}</p>
                })}
                <For
                    each=move || draft.with(|d| d.items().cloned().collect::<Vec<_>>())
                    key=|item| item.id.clone()
                    children=move |item: ObjectiveItem| view! { <ItemRow item=item draft=draft /> }
                />
            </fieldset>
            <div class="objective-form-footer">
                <div class="add-item-buttons">
                    {ItemCategory::ALL.iter().map(|&category| view! {
                        <button
                            type="button"
                            class="add-item-btn"
                            on:click=move |_| {
                                draft.update(|d| {
                                    d.add_item(category);
                                });
                            }
                        >
                            "+ " {category.info().title}
                        </button>
                    }).collect_view()}
                </div>
                <div class="submit-row">
                    {visible_close_button(edit_close_button, is_edit).map(|close| close.run())}
                    <button
                        type="button"
                        class="submit-btn"
                        disabled=move || submit_button_state(mode, loading.get()).0
                        on:click=handle_submit
                    >
                        {move || submit_button_state(mode, loading.get()).1}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// The close button is only shown in edit mode
fn visible_close_button(button: Option<ViewFn>, is_edit: bool) -> Option<ViewFn> {
    button.filter(|_| is_edit)
}

/// (disabled, label) for the submit button
fn submit_button_state(mode: FormMode, loading: bool) -> (bool, &'static str) {
    (loading, mode.button_label(loading))
}

/// Returns false when the draft is gone
fn apply_submit_outcome(draft: RwSignal<ObjectiveDraft>, outcome: &SubmitOutcome) -> bool {
    draft.try_update(|d| d.apply_outcome(outcome)).is_some()
}

/// One sub-item input with its category label and remove button
#[component]
fn ItemRow(item: ObjectiveItem, draft: RwSignal<ObjectiveDraft>) -> impl IntoView {
    let info = item.items_type.info();
    let id = StoredValue::new(item.id);

    view! {
        <div class="objective-item">
            <label class="objective-item-row">
                <span class="objective-item-label">" - " {info.title} " -"</span>
                <input
                    class="objective-item-input"
                    placeholder=info.placeholder
                    prop:value=move || id.with_value(|id| {
                        draft.with(|d| d.item_title(id).unwrap_or_default().to_string())
                    })
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        id.with_value(|id| draft.update(|d| {
                            d.set_item_title(id, title);
                        }));
                    }
                />
                <button
                    type="button"
                    class="remove-item-btn"
                    title="削除"
                    on:click=move |_| {
                        id.with_value(|id| draft.update(|d| {
                            d.remove_item_by_id(id);
                        }));
                    }
                >
                    "🗑"
                </button>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use objective_core::SubmitError;

    fn filled_draft() -> ObjectiveDraft {
        let mut draft = ObjectiveDraft::new();
        draft.set_title("Read more".to_string());
        draft.add_item(ItemCategory::Period);
        draft
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        assert_eq!(submit_button_state(FormMode::Create, false), (false, "保存"));
        assert_eq!(submit_button_state(FormMode::Create, true), (true, "保存中"));
        assert_eq!(submit_button_state(FormMode::Edit, true), (true, "更新中"));
    }

    #[test]
    fn test_close_button_only_in_edit_mode() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(visible_close_button(Some(ViewFn::from(|| "close")), false).is_none());
            assert!(visible_close_button(Some(ViewFn::from(|| "close")), true).is_some());
            assert!(visible_close_button(None, true).is_none());
        });
    }

    #[test]
    fn test_outcome_applied_while_mounted() {
        let owner = Owner::new();
        owner.with(|| {
            let draft = RwSignal::new(filled_draft());
            assert!(apply_submit_outcome(draft, &SubmitOutcome::Submitted));
            assert_eq!(draft.get_untracked().value(), Objective::empty());
        });
    }

    #[test]
    fn test_outcome_dropped_after_unmount() {
        let owner = Owner::new();
        owner.with(|| {
            let draft = RwSignal::new(filled_draft());
            draft.dispose();

            let failed = SubmitOutcome::Failed(SubmitError::Rejected("offline".to_string()));
            assert!(!apply_submit_outcome(draft, &failed));
            assert!(!apply_submit_outcome(draft, &SubmitOutcome::Submitted));
        });
    }
}
