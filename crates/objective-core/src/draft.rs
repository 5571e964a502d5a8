//! Objective Draft
//!
//! In-memory state of one mounted objective form.

use crate::buckets::CategoryBuckets;
use crate::model::{ItemCategory, Objective, ObjectiveItem};
use crate::submit::SubmitOutcome;
use crate::validation::{validate_title, ValidationError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveDraft {
    title: String,
    items: CategoryBuckets,
    title_error: Option<ValidationError>,
    /// Set after the first submit attempt; title edits re-validate from then on
    revalidate: bool,
}

impl ObjectiveDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the draft for edit mode.
    ///
    /// Category counts always come from the items themselves; a supplied
    /// `init_item_length` is only cross-checked.
    pub fn from_init(init_value: Option<Objective>, init_item_length: Option<[usize; 5]>) -> Self {
        let Some(objective) = init_value else {
            return Self::new();
        };
        let items = CategoryBuckets::from_items(objective.objective_items);
        if let Some(lengths) = init_item_length {
            if lengths != items.counts() {
                log::warn!(
                    "initial item lengths {:?} do not match items {:?}; using item counts",
                    lengths,
                    items.counts()
                );
            }
        }
        Self {
            title: objective.title,
            items,
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        if self.revalidate {
            self.title_error = validate_title(&self.title).err();
        }
    }

    pub fn title_error(&self) -> Option<&ValidationError> {
        self.title_error.as_ref()
    }

    pub fn items(&self) -> impl Iterator<Item = &ObjectiveItem> + '_ {
        self.items.iter()
    }

    pub fn item_title(&self, id: &str) -> Option<&str> {
        self.items().find(|item| item.id == id).map(|item| item.title.as_str())
    }

    pub fn counts(&self) -> [usize; 5] {
        self.items.counts()
    }

    /// Returns the presented index of the new blank item
    pub fn add_item(&mut self, category: ItemCategory) -> usize {
        let index = self.items.add(category);
        log::debug!("added {} item at {}", category.info().title, index);
        index
    }

    pub fn remove_item(&mut self, index: usize, category: ItemCategory) -> Option<ObjectiveItem> {
        self.items.remove(index, category)
    }

    pub fn remove_item_by_id(&mut self, id: &str) -> Option<ObjectiveItem> {
        self.items.remove_by_id(id)
    }

    pub fn set_item_title(&mut self, id: &str, title: String) -> bool {
        self.items.set_title(id, title)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }

    /// The aggregated form value
    pub fn value(&self) -> Objective {
        Objective {
            title: self.title.clone(),
            objective_items: self.items.to_vec(),
        }
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.items.clear();
        self.title_error = None;
        self.revalidate = false;
    }

    pub fn apply_outcome(&mut self, outcome: &SubmitOutcome) {
        self.revalidate = true;
        match outcome {
            SubmitOutcome::Invalid(err) => self.title_error = Some(err.clone()),
            SubmitOutcome::Submitted => self.reset(),
            SubmitOutcome::LoginRequired | SubmitOutcome::Failed(_) => self.title_error = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::SubmitError;

    fn filled_draft() -> ObjectiveDraft {
        let mut draft = ObjectiveDraft::new();
        draft.set_title("Learn Rust".to_string());
        draft.add_item(ItemCategory::Action);
        draft.add_item(ItemCategory::Period);
        draft
    }

    #[test]
    fn test_value_is_grouped() {
        let draft = filled_draft();
        let value = draft.value();
        assert_eq!(value.title, "Learn Rust");
        let kinds: Vec<_> = value.objective_items.iter().map(|item| item.items_type).collect();
        assert_eq!(kinds, vec![ItemCategory::Period, ItemCategory::Action]);
    }

    #[test]
    fn test_submitted_outcome_resets_everything() {
        let mut draft = filled_draft();
        draft.apply_outcome(&SubmitOutcome::Submitted);

        assert_eq!(draft.value(), Objective::empty());
        assert_eq!(draft.counts(), [0; 5]);
        assert!(draft.title_error().is_none());
    }

    #[test]
    fn test_failed_outcome_keeps_contents() {
        let mut draft = filled_draft();
        let before = draft.value();
        draft.apply_outcome(&SubmitOutcome::Failed(SubmitError::Rejected("offline".to_string())));
        assert_eq!(draft.value(), before);
    }

    #[test]
    fn test_title_revalidates_after_first_attempt() {
        let mut draft = ObjectiveDraft::new();
        draft.set_title("x".to_string());
        assert!(draft.title_error().is_none());

        let err = draft.validate().unwrap_err();
        draft.apply_outcome(&SubmitOutcome::Invalid(err));
        assert_eq!(draft.title_error(), Some(&ValidationError::TooShort { min: 2 }));

        draft.set_title("xy".to_string());
        assert!(draft.title_error().is_none());
        draft.set_title(String::new());
        assert_eq!(draft.title_error(), Some(&ValidationError::Required));
    }

    #[test]
    fn test_from_init_uses_item_counts() {
        let objective = Objective {
            title: "Edit me".to_string(),
            objective_items: vec![
                ObjectiveItem::blank(ItemCategory::Metric),
                ObjectiveItem::blank(ItemCategory::Degree),
            ],
        };
        let draft = ObjectiveDraft::from_init(Some(objective), Some([0, 0, 0, 0, 9]));

        assert_eq!(draft.title(), "Edit me");
        assert_eq!(draft.counts(), [0, 1, 0, 0, 1]);
    }

    #[test]
    fn test_item_title_edits() {
        let mut draft = filled_draft();
        let id = draft.items().next().unwrap().id.clone();

        assert!(draft.set_item_title(&id, "this month".to_string()));
        assert_eq!(draft.item_title(&id), Some("this month"));
        assert!(draft.remove_item_by_id(&id).is_some());
        assert_eq!(draft.item_title(&id), None);
    }
}
