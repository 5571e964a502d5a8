//! Objective Commands
//!
//! Frontend bindings for objective persistence, plus the submitter that
//! the objective form is wired to.

use async_trait::async_trait;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::JsValue;

use objective_core::{ObjectiveSubmitter, SubmitError};

use super::call;
use crate::context::AppContext;
use crate::models::{Objective, SavedObjective};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateObjectiveArgs<'a> {
    objective: &'a Objective,
}

#[derive(Serialize)]
struct UpdateObjectiveArgs<'a> {
    id: &'a str,
    objective: &'a Objective,
}

// ========================
// Commands
// ========================

pub async fn list_objectives() -> Result<Vec<SavedObjective>, String> {
    call("list_objectives", JsValue::NULL).await
}

pub async fn create_objective(objective: &Objective) -> Result<SavedObjective, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateObjectiveArgs { objective }).map_err(|e| e.to_string())?;
    call("create_objective", js_args).await
}

pub async fn update_objective(id: &str, objective: &Objective) -> Result<SavedObjective, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateObjectiveArgs { id, objective }).map_err(|e| e.to_string())?;
    call("update_objective", js_args).await
}

// ========================
// Submitter
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

/// Saves through the host and reloads the list on success.
/// Drives the caller's `loading` signal for the duration of the call.
#[derive(Clone)]
pub struct CommandSubmitter {
    target: SaveTarget,
    set_loading: WriteSignal<bool>,
    ctx: AppContext,
    /// Runs after a successful save, e.g. to close an edit form
    on_saved: Option<Callback<()>>,
}

impl CommandSubmitter {
    pub fn new(target: SaveTarget, set_loading: WriteSignal<bool>, ctx: AppContext) -> Self {
        Self { target, set_loading, ctx, on_saved: None }
    }

    pub fn with_on_saved(mut self, on_saved: Callback<()>) -> Self {
        self.on_saved = Some(on_saved);
        self
    }

    fn finish(&self, result: Result<SavedObjective, String>) -> Result<(), SubmitError> {
        let saved = result.map_err(SubmitError::Rejected)?;
        log::info!("[OBJECTIVE] Saved {} with {} items", saved.id, saved.objective_items.len());
        self.ctx.reload();
        if let Some(on_saved) = self.on_saved {
            on_saved.run(());
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ObjectiveSubmitter for CommandSubmitter {
    async fn submit(&self, objective: Objective) -> Result<(), SubmitError> {
        self.set_loading.try_set(true);
        let result = match &self.target {
            SaveTarget::Create => create_objective(&objective).await,
            SaveTarget::Update(id) => update_objective(id, &objective).await,
        };
        self.set_loading.try_set(false);
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn saved() -> SavedObjective {
        SavedObjective {
            id: "obj-1".to_string(),
            title: "Run a marathon".to_string(),
            objective_items: Vec::new(),
        }
    }

    fn submitter(editing: RwSignal<bool>) -> CommandSubmitter {
        let (_, set_loading) = signal(false);
        let ctx = AppContext::new(signal(0), 3000);
        CommandSubmitter::new(SaveTarget::Update("obj-1".to_string()), set_loading, ctx)
            .with_on_saved(Callback::new(move |_| editing.set(false)))
    }

    #[test]
    fn test_successful_update_closes_editor_and_reloads() {
        let owner = Owner::new();
        owner.with(|| {
            let editing = RwSignal::new(true);
            let submitter = submitter(editing);

            assert_eq!(submitter.finish(Ok(saved())), Ok(()));
            assert!(!editing.get_untracked());
            assert_eq!(submitter.ctx.reload_trigger.get_untracked(), 1);
        });
    }

    #[test]
    fn test_rejected_update_keeps_editor_open() {
        let owner = Owner::new();
        owner.with(|| {
            let editing = RwSignal::new(true);
            let submitter = submitter(editing);

            let result = submitter.finish(Err("disk full".to_string()));
            assert_eq!(result, Err(SubmitError::Rejected("disk full".to_string())));
            assert!(editing.get_untracked());
            assert_eq!(submitter.ctx.reload_trigger.get_untracked(), 0);
        });
    }
}
